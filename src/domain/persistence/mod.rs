//! Persistence Module - saved decision values and their sanitization.

mod explorer_state;
mod state_sanitizer;

pub use explorer_state::{DecisionValue, ExplorerState};
pub use state_sanitizer::StateSanitizer;
