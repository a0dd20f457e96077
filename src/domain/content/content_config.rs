//! Raw content configuration as authored in the editor.
//!
//! Every field is optional here; `ContentSanitizer` decides what survives.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentConfig {
    #[serde(default)]
    pub decisions: Vec<DecisionConfig>,
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
    /// Weight table; entries replace a decision's inline weights.
    #[serde(default)]
    pub weights: Vec<WeightConfig>,
    #[serde(default)]
    pub behaviour: BehaviourConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub weights: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetConfig {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub gives_live_feedback: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightConfig {
    pub decision_id: String,
    #[serde(default)]
    pub targets: Vec<TargetWeightConfig>,
}

/// One coefficient in a weight table row.
///
/// Addressed by `target_id` when present, otherwise by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetWeightConfig {
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviourConfig {
    /// Content-wide default for targets without their own flag.
    #[serde(default)]
    pub gives_live_feedback: Option<bool>,
}
