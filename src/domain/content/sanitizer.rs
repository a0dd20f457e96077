//! Content Sanitizer - turns authored configuration into validated content.
//!
//! Malformed entries are dropped or repaired, never fatal. Each repair is
//! recorded as a `ValidationError` so callers can log or display it.

use std::collections::HashSet;
use tracing::warn;

use super::content_config::{ContentConfig, DecisionConfig, TargetConfig, WeightConfig};
use super::{Decision, Target};
use crate::domain::foundation::{DecisionId, ValidationError};

/// Validated decisions and targets, with weights aligned to the targets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content {
    pub decisions: Vec<Decision>,
    pub targets: Vec<Target>,
}

impl Content {
    /// True when there is at least one decision and one target to show.
    pub fn is_complete(&self) -> bool {
        !self.decisions.is_empty() && !self.targets.is_empty()
    }
}

/// Result of sanitization: the content plus every issue that was repaired.
#[derive(Debug, Clone, Default)]
pub struct SanitizedContent {
    pub content: Content,
    pub issues: Vec<ValidationError>,
}

pub struct ContentSanitizer;

impl ContentSanitizer {
    /// Sanitizes raw content.
    ///
    /// # Rules
    /// - Decisions without a label or id are dropped; duplicate ids keep the first
    /// - A `max` at or below `min` is discarded, making the decision dynamic
    /// - Weight table rows naming unknown decisions or targets are dropped
    /// - A weight table row replaces the decision's inline weights
    /// - Missing weights count as 0; weight vectors match the target count
    pub fn sanitize(config: ContentConfig, default_live_feedback: bool) -> SanitizedContent {
        let mut issues = Vec::new();
        let default_live_feedback = config
            .behaviour
            .gives_live_feedback
            .unwrap_or(default_live_feedback);

        let targets: Vec<Target> = config
            .targets
            .into_iter()
            .map(|t| Self::sanitize_target(t, default_live_feedback))
            .collect();

        let mut seen = HashSet::new();
        let mut decisions = Vec::new();
        for (index, raw) in config.decisions.into_iter().enumerate() {
            match Self::sanitize_decision(raw, index, &mut issues) {
                Ok(decision) => {
                    if seen.insert(decision.id.clone()) {
                        decisions.push(decision);
                    } else {
                        issues.push(ValidationError::invalid_format(
                            format!("decisions[{}].id", index),
                            format!("duplicate id '{}'", decision.id),
                        ));
                    }
                }
                Err(issue) => issues.push(issue),
            }
        }

        for row in config.weights {
            Self::apply_weight_row(row, &mut decisions, &targets, &mut issues);
        }

        for decision in &mut decisions {
            decision.weights.resize(targets.len(), 0.0);
        }

        for issue in &issues {
            warn!(%issue, "Content sanitized");
        }

        SanitizedContent {
            content: Content { decisions, targets },
            issues,
        }
    }

    fn sanitize_target(raw: TargetConfig, default_live_feedback: bool) -> Target {
        Target {
            id: raw.id.filter(|id| !id.trim().is_empty()),
            label: raw.label.unwrap_or_default(),
            unit: raw.unit.unwrap_or_default(),
            min: raw.min.filter(|v| v.is_finite()),
            max: raw.max.filter(|v| v.is_finite()),
            gives_live_feedback: raw.gives_live_feedback.unwrap_or(default_live_feedback),
        }
    }

    fn sanitize_decision(
        raw: DecisionConfig,
        index: usize,
        issues: &mut Vec<ValidationError>,
    ) -> Result<Decision, ValidationError> {
        let field = |name: &str| format!("decisions[{}].{}", index, name);

        let label = raw.label.unwrap_or_default();
        if label.trim().is_empty() {
            return Err(ValidationError::empty_field(field("label")));
        }

        let id = DecisionId::new(raw.id.unwrap_or_default())
            .map_err(|_| ValidationError::empty_field(field("id")))?;

        let min = raw.min.filter(|v| v.is_finite()).unwrap_or(0.0);
        let max = match raw.max {
            Some(max) if max.is_finite() && max > min => Some(max),
            Some(max) => {
                issues.push(ValidationError::out_of_range(field("max"), min, f64::MAX, max));
                None
            }
            None => None,
        };

        let weights = raw
            .weights
            .into_iter()
            .map(|w| w.filter(|v| v.is_finite()).unwrap_or(0.0))
            .collect();

        let mut decision = Decision::new(id, label)?
            .with_unit(raw.unit.unwrap_or_default())
            .with_min(min)
            .with_weights(weights);
        decision.max = max;
        Ok(decision)
    }

    fn apply_weight_row(
        row: WeightConfig,
        decisions: &mut [Decision],
        targets: &[Target],
        issues: &mut Vec<ValidationError>,
    ) {
        let Some(decision) = decisions
            .iter_mut()
            .find(|d| d.id.as_str() == row.decision_id)
        else {
            issues.push(ValidationError::unknown_reference(
                "weights.decisionId",
                row.decision_id,
            ));
            return;
        };

        let mut weights = vec![0.0; targets.len()];
        for (position, entry) in row.targets.into_iter().enumerate() {
            let index = match &entry.target_id {
                Some(target_id) => {
                    match targets.iter().position(|t| t.id.as_deref() == Some(target_id.as_str())) {
                        Some(index) => index,
                        None => {
                            issues.push(ValidationError::unknown_reference(
                                "weights.targets.targetId",
                                target_id.clone(),
                            ));
                            continue;
                        }
                    }
                }
                None if position < targets.len() => position,
                None => continue,
            };

            weights[index] = entry.weight.filter(|v| v.is_finite()).unwrap_or(0.0);
        }

        decision.weights = weights;
    }
}
