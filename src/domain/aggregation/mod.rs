//! Aggregation Module - derives target results from decision values.
//!
//! # Components
//!
//! - `AggregationEngine` - rounded weighted sums, recomputed in full on every call
//! - `Feedback` - acceptable/unacceptable classification against a target range
//! - `ResultDisplay` - holds the latest result for a target
//!
//! All computation is pure; the explorer decides when to run it.

mod aggregation_engine;
mod result_value;

pub use aggregation_engine::AggregationEngine;
pub use result_value::{Feedback, ResultDisplay, ResultValue};
