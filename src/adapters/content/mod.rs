//! Content adapters - loading authored content and saved state.

mod file_loader;

pub use file_loader::{ContentFileLoader, ContentLoadError};
