//! Behaviour defaults

use serde::Deserialize;

/// Defaults applied when content does not say otherwise
#[derive(Debug, Clone, Deserialize)]
pub struct BehaviourConfig {
    /// Whether targets without their own flag classify results
    #[serde(default = "default_gives_live_feedback")]
    pub gives_live_feedback: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            gives_live_feedback: default_gives_live_feedback(),
        }
    }
}

fn default_gives_live_feedback() -> bool {
    true
}
