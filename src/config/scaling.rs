//! Auto-scaling configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::panel::FALLBACK_MAX_VALUE;

/// Settings for dynamic panel ceilings
#[derive(Debug, Clone, Deserialize)]
pub struct ScalingConfig {
    /// Smallest ceiling a dynamic panel can have; ceilings grow by powers of ten from here
    #[serde(default = "default_base")]
    pub base: f64,
}

impl ScalingConfig {
    /// Validate scaling configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base.is_finite() || self.base <= 0.0 {
            return Err(ValidationError::InvalidScalingBase(self.base));
        }
        Ok(())
    }
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
        }
    }
}

fn default_base() -> f64 {
    FALLBACK_MAX_VALUE
}
