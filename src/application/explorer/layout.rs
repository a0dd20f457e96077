//! Shared layout metrics so every panel and result lines up.
//!
//! Widths are measured in characters; a host turns them into CSS `ch`
//! units or terminal columns.

use serde::{Deserialize, Serialize};

use crate::domain::aggregation::ResultValue;
use crate::domain::content::Content;

/// Column widths shared by all panels and results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Longest decision label.
    pub label_width: usize,
    /// Longest unit across decisions and targets.
    pub unit_width: usize,
    /// Integer digits of the largest panel ceiling.
    pub max_input_field_digits: usize,
    /// Longest rounded result, sign included.
    pub max_result_digits: usize,
}

impl LayoutMetrics {
    /// Measures content, panel ceilings and current results.
    pub fn measure(
        content: &Content,
        ceilings: impl IntoIterator<Item = f64>,
        results: &[Option<ResultValue>],
    ) -> Self {
        let label_width = content
            .decisions
            .iter()
            .map(|d| d.label.chars().count())
            .max()
            .unwrap_or(0);

        let unit_width = content
            .decisions
            .iter()
            .map(|d| d.unit.as_str())
            .chain(content.targets.iter().map(|t| t.unit.as_str()))
            .map(|unit| unit.chars().count())
            .max()
            .unwrap_or(0);

        let max_input_field_digits = ceilings
            .into_iter()
            .filter(|c| c.is_finite())
            .map(integer_digits)
            .max()
            .unwrap_or(0);

        let max_result_digits = results
            .iter()
            .flatten()
            .map(|r| r.value.to_string().len())
            .max()
            .unwrap_or(0);

        Self {
            label_width,
            unit_width,
            max_input_field_digits,
            max_result_digits,
        }
    }
}

/// Digits before the decimal point, at least one.
fn integer_digits(value: f64) -> usize {
    let magnitude = value.abs();
    if magnitude < 10.0 {
        1
    } else {
        magnitude.log10().floor() as usize + 1
    }
}
