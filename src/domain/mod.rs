//! Domain layer containing the explorer's widget model and calculations.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, state machine, errors)
//! - `controls` - Range control and bounded number field
//! - `panel` - Paired controls with auto-scaling ceilings
//! - `content` - Decisions, targets and content sanitization
//! - `aggregation` - Pure weighted-sum engine and result feedback
//! - `persistence` - Saved state and its sanitization

pub mod aggregation;
pub mod content;
pub mod controls;
pub mod foundation;
pub mod panel;
pub mod persistence;
