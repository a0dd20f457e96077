//! View model handed to a host for drawing.

use serde::{Deserialize, Serialize};

use super::LayoutMetrics;
use crate::domain::aggregation::Feedback;
use crate::domain::foundation::{DecisionId, ElementId};

/// One decision's controls as they should currently be drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelView {
    pub id: DecisionId,
    /// Links the label to both controls.
    pub label_id: ElementId,
    pub label: String,
    pub unit: String,
    pub value: f64,
    /// Value the range control last painted; lags `value` until the next frame.
    pub painted_value: f64,
    pub max: f64,
    pub fixed_max: bool,
    pub fill_ratio: f64,
    pub field_text: String,
}

/// One target's result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultView {
    pub label: String,
    pub unit: String,
    pub value: Option<i64>,
    pub feedback: Feedback,
}

/// Everything a host needs to draw the explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerView {
    /// Set when content has no decisions or no targets; nothing else is drawn.
    pub missing_parameters: bool,
    pub panels: Vec<PanelView>,
    pub results: Vec<ResultView>,
    pub layout: LayoutMetrics,
}
