//! Persisted explorer state - a flat list of decision values.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DecisionId;

/// One saved decision value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionValue {
    pub id: DecisionId,
    pub value: f64,
}

impl DecisionValue {
    pub fn new(id: DecisionId, value: f64) -> Self {
        Self { id, value }
    }
}

/// Saved state, in decision order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerState {
    #[serde(default)]
    pub decisions: Vec<DecisionValue>,
}

impl ExplorerState {
    pub fn new(decisions: Vec<DecisionValue>) -> Self {
        Self { decisions }
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    /// Saved value for a decision, if present.
    pub fn value_of(&self, id: &DecisionId) -> Option<f64> {
        self.decisions.iter().find(|d| &d.id == id).map(|d| d.value)
    }
}
