//! Auto-Scaling Input Panel - one range control and one number field
//! mirroring the same decision value.
//!
//! Panels without a fixed maximum grow their ceiling by powers of ten as
//! the user pushes past it, and relax back to the tightest fitting ceiling
//! once a drag ends or a value is typed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::auto_scale::{compute_next_max_value, FALLBACK_MAX_VALUE};
use crate::domain::controls::{
    BoundedNumberField, FieldEvent, Key, PointerKind, RangeControl, RangeControlParams, RangeEvent,
};

/// A user interaction routed to one panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelInteraction {
    Press { pointer: PointerKind },
    Seek { value: f64 },
    Release,
    KeyDown { key: Key },
    KeyUp,
    FieldInput { text: String },
    FieldBlur,
}

/// Notifications a panel sends to its controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelEvent {
    ValueChanged { value: f64 },
    MaxValueChanged { max: f64 },
}

/// Construction parameters for a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelParams {
    pub min: f64,
    pub max: Option<f64>,
    pub base: f64,
    pub initial: Option<f64>,
}

impl PanelParams {
    /// A non-finite `min` falls back to 0.
    pub fn new(min: f64, max: Option<f64>) -> Self {
        Self {
            min: finite_or_zero(min),
            max,
            base: FALLBACK_MAX_VALUE,
            initial: None,
        }
    }

    /// Overrides the base ceiling of a dynamic panel.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    pub fn with_initial(mut self, initial: f64) -> Self {
        self.initial = Some(initial);
        self
    }
}

/// Runtime state of a panel.
///
/// Invariant: `min_value <= current_value <= effective_max_value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelState {
    pub min_value: f64,
    pub current_value: f64,
    pub effective_max_value: f64,
    pub is_fixed_max: bool,
}

#[derive(Debug, Clone)]
pub struct AutoScalingInputPanel {
    range: RangeControl,
    field: BoundedNumberField,
    min_value: f64,
    fixed_max: Option<f64>,
    base: f64,
    ceiling: f64,
}

impl AutoScalingInputPanel {
    /// Creates a panel. A fixed maximum at or below the minimum is ignored.
    pub fn new(params: PanelParams) -> Self {
        let min_value = finite_or_zero(params.min);
        let base = if params.base.is_finite() && params.base > 0.0 {
            params.base
        } else {
            FALLBACK_MAX_VALUE
        };
        let fixed_max = params.max.filter(|m| m.is_finite() && *m > min_value);

        let upper = fixed_max.unwrap_or(f64::INFINITY);
        let initial = params
            .initial
            .filter(|v| v.is_finite())
            .unwrap_or_else(|| min_value.max(0.0))
            .clamp(min_value, upper);

        let ceiling = fixed_max.unwrap_or_else(|| compute_next_max_value(initial, base));

        let range = RangeControl::new(
            RangeControlParams::new(min_value, ceiling).with_initial_value(initial),
        );
        let mut field = BoundedNumberField::new(min_value, fixed_max);
        field.set_value(initial);

        Self {
            range,
            field,
            min_value,
            fixed_max,
            base,
            ceiling,
        }
    }

    pub fn has_fixed_max(&self) -> bool {
        self.fixed_max.is_some()
    }

    /// Last committed value, always within `[min, ceiling]`.
    pub fn value(&self) -> f64 {
        self.range.value()
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    /// Effective ceiling: the fixed maximum or the current dynamic one.
    pub fn max_value(&self) -> f64 {
        self.ceiling
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn range(&self) -> &RangeControl {
        &self.range
    }

    pub fn field(&self) -> &BoundedNumberField {
        &self.field
    }

    pub fn state(&self) -> PanelState {
        PanelState {
            min_value: self.min_value,
            current_value: self.value(),
            effective_max_value: self.ceiling,
            is_fixed_max: self.has_fixed_max(),
        }
    }

    /// Routes an interaction to the right control and reconciles the pair.
    pub fn interact(&mut self, interaction: PanelInteraction) -> Vec<PanelEvent> {
        let mut events = Vec::new();

        match interaction {
            PanelInteraction::Press { pointer } => {
                // Starting a drag changes nothing yet.
                self.range.press(pointer);
            }
            PanelInteraction::Seek { value } => {
                if let Some(event) = self.range.seek(value) {
                    self.on_range_event(event, &mut events);
                }
            }
            PanelInteraction::Release => {
                if let Some(event) = self.range.release() {
                    self.on_range_event(event, &mut events);
                }
            }
            PanelInteraction::KeyDown { key } => {
                for event in self.range.key_down(key) {
                    self.on_range_event(event, &mut events);
                }
            }
            PanelInteraction::KeyUp => {
                if let Some(event) = self.range.key_up() {
                    self.on_range_event(event, &mut events);
                }
            }
            PanelInteraction::FieldInput { text } => {
                if let Some(FieldEvent::Input { value }) = self.field.input(text) {
                    self.on_field_input(value, &mut events);
                }
            }
            PanelInteraction::FieldBlur => {
                if let FieldEvent::Blurred { value } = self.field.blur() {
                    self.on_field_blur(value);
                }
            }
        }

        events
    }

    /// Sets the value programmatically, e.g. when restoring saved state.
    ///
    /// Clamps to the panel's bounds and grows a dynamic ceiling to fit.
    pub fn set_value(&mut self, value: f64) -> Vec<PanelEvent> {
        let mut events = Vec::new();
        if !value.is_finite() {
            return events;
        }

        let value = value.clamp(self.min_value, self.fixed_max.unwrap_or(f64::INFINITY));
        if !self.has_fixed_max() {
            self.apply_ceiling(compute_next_max_value(value, self.base), &mut events);
        }

        self.range.set_value(value);
        self.field.set_value(value);
        events.push(PanelEvent::ValueChanged {
            value: self.range.value(),
        });
        events
    }

    /// Returns both controls to the minimum and relaxes a dynamic ceiling.
    pub fn reset(&mut self) -> Vec<PanelEvent> {
        let mut events = Vec::new();

        if !self.has_fixed_max() {
            self.apply_ceiling(compute_next_max_value(self.min_value, self.base), &mut events);
        }

        self.range.reset();
        self.field.reset();
        events.push(PanelEvent::ValueChanged {
            value: self.range.value(),
        });
        events
    }

    /// Flushes the range control's deferred display value.
    pub fn paint(&mut self) -> bool {
        self.range.paint()
    }

    fn on_range_event(&mut self, event: RangeEvent, events: &mut Vec<PanelEvent>) {
        match event {
            RangeEvent::Started => {}
            RangeEvent::Seeked { value } => {
                if !self.has_fixed_max() && value >= self.ceiling {
                    self.apply_ceiling(compute_next_max_value(value, self.base), events);
                }
                self.field.set_value(value);
                events.push(PanelEvent::ValueChanged { value });
            }
            RangeEvent::Ended { value } => {
                if !self.has_fixed_max() {
                    let next = compute_next_max_value(value, self.base);
                    if value == self.range.max_value() || value < self.ceiling {
                        self.apply_ceiling(next, events);
                    }
                }
                events.push(PanelEvent::ValueChanged { value });
            }
        }
    }

    fn on_field_input(&mut self, value: f64, events: &mut Vec<PanelEvent>) {
        if !self.has_fixed_max() {
            self.apply_ceiling(compute_next_max_value(value, self.base), events);
        }

        self.range.set_value(value);
        events.push(PanelEvent::ValueChanged {
            value: self.range.value(),
        });
    }

    fn on_field_blur(&mut self, value: f64) {
        let out_of_range = value.is_nan()
            || value < self.min_value
            || self.fixed_max.map_or(false, |max| value > max);

        if out_of_range {
            debug!(value, restored = self.range.value(), "Restoring field to last valid value");
            self.field.set_value(self.range.value());
        }
    }

    fn apply_ceiling(&mut self, ceiling: f64, events: &mut Vec<PanelEvent>) {
        if ceiling == self.ceiling {
            return;
        }
        if !self.range.set_max_value(ceiling) {
            return;
        }

        debug!(from = self.ceiling, to = ceiling, "Panel ceiling rescaled");
        self.ceiling = ceiling;
        events.push(PanelEvent::MaxValueChanged { max: ceiling });
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
