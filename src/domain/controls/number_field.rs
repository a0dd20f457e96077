//! Bounded Number Field - a numeric text control bounded to `[min, max]`.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Notifications emitted by a number field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldEvent {
    /// Live input that passed the lower bound, clamped to the upper bound.
    Input { value: f64 },
    /// Focus left the field. The value may be NaN or out of range.
    Blurred { value: f64 },
}

/// A numeric text field.
///
/// The text is kept exactly as typed; only the emitted values are bounded.
#[derive(Debug, Clone)]
pub struct BoundedNumberField {
    min: f64,
    max: Option<f64>,
    text: String,
}

impl BoundedNumberField {
    pub fn new(min: f64, max: Option<f64>) -> Self {
        let min = if min.is_finite() { min } else { 0.0 };
        let max = max.filter(|m| m.is_finite() && *m >= min);
        let initial = match max {
            Some(max) => min.max(0.0).min(max),
            None => min.max(0.0),
        };

        Self {
            min,
            max,
            text: format_number(initial),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Replaces the upper bound, e.g. when a partner control rescales.
    pub fn set_max(&mut self, max: Option<f64>) {
        self.max = max.filter(|m| m.is_finite() && *m >= self.min);
    }

    /// Raw field text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Parses the field text. Returns NaN for empty or invalid text.
    pub fn value(&self) -> f64 {
        parse_number(&self.text)
    }

    /// Returns true if `value` lies within the field's bounds.
    pub fn accepts(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    /// Shows `value`. No-op unless it lies within the bounds.
    pub fn set_value(&mut self, value: f64) -> bool {
        if !self.accepts(value) {
            return false;
        }

        self.text = format_number(value);
        true
    }

    /// User typed into the field.
    pub fn input(&mut self, text: impl Into<String>) -> Option<FieldEvent> {
        self.text = text.into();

        let value = self.value();
        if value.is_nan() || value < self.min {
            trace!(text = %self.text, "Ignored field input below minimum or invalid");
            return None;
        }

        let value = match self.max {
            Some(max) if value > max => max,
            _ => value,
        };
        Some(FieldEvent::Input { value })
    }

    pub fn blur(&self) -> FieldEvent {
        FieldEvent::Blurred {
            value: self.value(),
        }
    }

    pub fn reset(&mut self) {
        self.text = format_number(self.min);
    }
}

/// Formats a value the way a number input shows it (`5`, not `5.0`).
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

fn parse_number(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(f64::NAN)
}
