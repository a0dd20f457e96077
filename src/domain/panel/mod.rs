//! Panel Module - a decision's paired controls and their ceiling policy.
//!
//! # Components
//!
//! - `compute_next_max_value` - snaps ceilings to `base · 10^k`
//! - `AutoScalingInputPanel` - keeps a range control and a number field in
//!   sync and rescales panels that have no fixed maximum

mod auto_scale;
mod input_panel;

pub use auto_scale::{compute_next_max_value, FALLBACK_MAX_VALUE};
pub use input_panel::{
    AutoScalingInputPanel, PanelEvent, PanelInteraction, PanelParams, PanelState,
};
