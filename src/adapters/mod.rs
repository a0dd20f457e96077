//! Adapters - Implementations of port interfaces and outside-world access.
//!
//! Adapters connect the widget core to its environment:
//! - `ids` - IdGenerator implementations (UUID, sequential)
//! - `content` - Content and saved-state loading from JSON/YAML files

pub mod content;
pub mod ids;

pub use content::{ContentFileLoader, ContentLoadError};
pub use ids::{SequentialIdGenerator, UuidIdGenerator};
