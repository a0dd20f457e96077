//! Controls Module - the two input controls a panel is built from.
//!
//! # Components
//!
//! - `RangeControl` - draggable control with an `Idle -> Seeking -> Idle` lifecycle
//! - `BoundedNumberField` - numeric text field with live input and blur commit
//!
//! Both report interactions as event enums returned in emission order
//! rather than through registered callbacks.

mod keyboard;
mod number_field;
mod range_control;
mod seek_state;

pub use keyboard::{hold_step, Key};
pub use number_field::{format_number, BoundedNumberField, FieldEvent};
pub use range_control::{PointerKind, RangeControl, RangeControlParams, RangeEvent};
pub use seek_state::SeekState;
