//! Explorer settings resolved from application configuration.

use crate::config::AppConfig;
use crate::domain::panel::FALLBACK_MAX_VALUE;

/// Runtime knobs that content does not carry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerSettings {
    /// Base ceiling for panels without a fixed maximum.
    pub base: f64,
    /// Live feedback default for targets without their own flag.
    pub gives_live_feedback: bool,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            base: FALLBACK_MAX_VALUE,
            gives_live_feedback: true,
        }
    }
}

impl From<&AppConfig> for ExplorerSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            base: config.scaling.base,
            gives_live_feedback: config.behaviour.gives_live_feedback,
        }
    }
}
