//! Target - a computed result derived from weighted decisions.

use serde::{Deserialize, Serialize};

/// A derived output with an optional acceptable range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Author-supplied id, used to address the target from a weight table.
    pub id: Option<String>,
    pub label: String,
    pub unit: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub gives_live_feedback: bool,
}

impl Target {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Sets the acceptable range. Either bound may be open.
    pub fn with_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_live_feedback(mut self, enabled: bool) -> Self {
        self.gives_live_feedback = enabled;
        self
    }

    /// Inclusive range check; undefined bounds always pass.
    pub fn is_within_range(&self, value: i64) -> bool {
        let value = value as f64;
        let above_min = self.min.map_or(true, |min| value >= min);
        let below_max = self.max.map_or(true, |max| value <= max);
        above_min && below_max
    }
}
