//! Content Module - decisions, targets and the configuration they come from.
//!
//! # Components
//!
//! - `ContentConfig` - raw, loosely-typed authored configuration
//! - `ContentSanitizer` - validates and repairs configuration into `Content`
//! - `Decision` / `Target` - immutable content the explorer is built from

mod content_config;
mod decision;
mod sanitizer;
mod target;

pub use content_config::{
    BehaviourConfig, ContentConfig, DecisionConfig, TargetConfig, TargetWeightConfig, WeightConfig,
};
pub use decision::Decision;
pub use sanitizer::{Content, ContentSanitizer, SanitizedContent};
pub use target::Target;
