//! State Sanitizer - filters saved state down to what the content knows.

use serde_json::Value;
use tracing::debug;

use super::{DecisionValue, ExplorerState};
use crate::domain::foundation::DecisionId;

pub struct StateSanitizer;

impl StateSanitizer {
    /// Keeps entries whose id is known and whose value is a finite number ≥ 0.
    pub fn sanitize(state: ExplorerState, known_ids: &[DecisionId]) -> ExplorerState {
        let decisions = state
            .decisions
            .into_iter()
            .filter(|entry| {
                let keep = known_ids.contains(&entry.id) && Self::is_valid_value(entry.value);
                if !keep {
                    debug!(id = %entry.id, value = entry.value, "Dropped saved decision value");
                }
                keep
            })
            .collect();

        ExplorerState { decisions }
    }

    /// Sanitizes an untyped payload, e.g. previous state handed over by a host.
    ///
    /// # Edge Cases
    /// - Not an object, or `decisions` not an array: empty state
    /// - Non-string ids, non-numeric values: entry dropped
    pub fn sanitize_json(payload: &Value, known_ids: &[DecisionId]) -> ExplorerState {
        let Some(entries) = payload.get("decisions").and_then(Value::as_array) else {
            return ExplorerState::default();
        };

        let decisions = entries
            .iter()
            .filter_map(|entry| {
                let id = entry.get("id")?.as_str()?;
                let value = entry.get("value")?.as_f64()?;
                let id = DecisionId::new(id).ok()?;
                Some(DecisionValue::new(id, value))
            })
            .collect();

        Self::sanitize(ExplorerState { decisions }, known_ids)
    }

    fn is_valid_value(value: f64) -> bool {
        value.is_finite() && value >= 0.0
    }
}
