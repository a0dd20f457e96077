//! Decision - a user-adjustable weighted input.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionId, ValidationError};

/// A weighted input contributing to every target.
///
/// `weights[t]` is the coefficient for the target at index `t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub id: DecisionId,
    pub label: String,
    pub unit: String,
    pub min: f64,
    /// Fixed maximum. `None` lets the panel scale its ceiling.
    pub max: Option<f64>,
    pub weights: Vec<f64>,
}

impl Decision {
    /// Creates a decision with default range `[0, dynamic)` and no weights.
    pub fn new(id: DecisionId, label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field("label"));
        }

        Ok(Self {
            id,
            label,
            unit: String::new(),
            min: 0.0,
            max: None,
            weights: Vec::new(),
        })
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sets the minimum. A non-finite value falls back to 0.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = if min.is_finite() { min } else { 0.0 };
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = weights;
        self
    }

    /// Coefficient for a target; missing entries count as zero.
    pub fn weight_for(&self, target_index: usize) -> f64 {
        self.weights.get(target_index).copied().unwrap_or(0.0)
    }

    pub fn has_fixed_max(&self) -> bool {
        self.max.is_some()
    }
}
