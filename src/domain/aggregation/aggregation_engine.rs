//! Aggregation Engine - weighted sums of decision values per target.

use tracing::warn;

use super::{Feedback, ResultValue};
use crate::domain::content::{Decision, Target};

/// 2^63: the first magnitude an `i64` cannot hold.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Computes target results from decision values.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Raw weighted sum for every target.
    ///
    /// # Algorithm
    /// For each target t: sum[t] = Σ_d weight[d][t] × value[d]
    ///
    /// # Edge Cases
    /// - No decisions: every sum is 0
    /// - Missing weights: treated as 0
    /// - `values` shorter than `decisions`: extra decisions are skipped
    pub fn weighted_sums(decisions: &[Decision], values: &[f64], target_count: usize) -> Vec<f64> {
        (0..target_count)
            .map(|target_index| {
                decisions
                    .iter()
                    .zip(values)
                    .map(|(decision, value)| decision.weight_for(target_index) * value)
                    .sum::<f64>()
            })
            .collect()
    }

    /// Rounded result and feedback for every target, index-aligned.
    ///
    /// Rounds half away from zero. A non-finite sum, or one whose rounded
    /// value does not fit an `i64`, yields `None` so the display keeps its
    /// previous value.
    pub fn compute(
        decisions: &[Decision],
        values: &[f64],
        targets: &[Target],
    ) -> Vec<Option<ResultValue>> {
        Self::weighted_sums(decisions, values, targets.len())
            .into_iter()
            .zip(targets)
            .map(|(sum, target)| {
                if !sum.is_finite() {
                    return None;
                }
                let rounded = sum.round();
                if rounded < -I64_LIMIT || rounded >= I64_LIMIT {
                    warn!(sum, target = %target.label, "Result out of integer range, keeping previous value");
                    return None;
                }
                let value = rounded as i64;
                Some(ResultValue {
                    value,
                    feedback: Feedback::classify(target, value),
                })
            })
            .collect()
    }
}
