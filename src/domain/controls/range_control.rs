//! Range Control - a draggable control over `[min, max]`.
//!
//! Reports continuous `Seeked` values while a drag or key hold is active and
//! a final `Ended` value on release. The displayed value is committed on the
//! next paint so a ceiling change is always applied before the value is
//! clamped and shown.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::keyboard::{hold_step, Key};
use super::SeekState;
use crate::domain::foundation::StateMachine;

/// Input device that started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Notifications emitted by a range control, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RangeEvent {
    Started,
    Seeked { value: f64 },
    Ended { value: f64 },
}

/// Construction parameters for a range control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeControlParams {
    pub min_value: f64,
    pub max_value: f64,
    #[serde(default)]
    pub initial_value: Option<f64>,
}

impl RangeControlParams {
    /// Creates parameters without an initial value.
    pub fn new(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
            initial_value: None,
        }
    }

    /// Sets the initial value.
    pub fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = Some(value);
        self
    }
}

/// A single range control.
#[derive(Debug, Clone)]
pub struct RangeControl {
    min_value: f64,
    max_value: f64,
    value: f64,
    painted_value: f64,
    pending_paint: bool,
    fill_ratio: f64,
    seek_state: SeekState,
    hold_count: u32,
    enabled: bool,
}

impl RangeControl {
    /// Creates a control. A ceiling below the minimum collapses onto it;
    /// a non-finite minimum becomes 0.
    pub fn new(params: RangeControlParams) -> Self {
        let min_value = if params.min_value.is_finite() {
            params.min_value
        } else {
            0.0
        };
        let max_value = if params.max_value.is_finite() {
            params.max_value.max(min_value)
        } else {
            min_value
        };
        let initial = params
            .initial_value
            .filter(|v| v.is_finite())
            .unwrap_or_else(|| min_value.max(0.0))
            .clamp(min_value, max_value);

        let mut control = Self {
            min_value,
            max_value,
            value: initial,
            painted_value: initial,
            pending_paint: false,
            fill_ratio: 0.0,
            seek_state: SeekState::Idle,
            hold_count: 0,
            enabled: true,
        };
        control.update_fill_ratio();
        control
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Proportion of the track that is filled, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        self.fill_ratio
    }

    /// Value currently shown by the platform widget.
    pub fn painted_value(&self) -> f64 {
        self.painted_value
    }

    pub fn has_pending_paint(&self) -> bool {
        self.pending_paint
    }

    pub fn seek_state(&self) -> SeekState {
        self.seek_state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disables the control; interactions are ignored until re-enabled.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Sets the value, clamping silently. Non-finite input is ignored.
    pub fn set_value(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }

        self.value = value.clamp(self.min_value, self.max_value);
        self.update_fill_ratio();
        self.pending_paint = true;
    }

    /// Sets a new ceiling. Returns false if the ceiling was rejected.
    pub fn set_max_value(&mut self, max_value: f64) -> bool {
        if !max_value.is_finite() || max_value < self.min_value {
            debug!(max_value, min_value = self.min_value, "Rejected range ceiling");
            return false;
        }

        self.max_value = max_value;
        if self.value > max_value {
            self.value = max_value;
        }
        self.update_fill_ratio();
        self.pending_paint = true;
        true
    }

    /// Returns the value to the minimum.
    pub fn reset(&mut self) {
        self.set_value(self.min_value);
    }

    /// Commits the deferred display value. Returns true if anything changed.
    pub fn paint(&mut self) -> bool {
        if !self.pending_paint {
            return false;
        }

        self.painted_value = self.value.clamp(self.min_value, self.max_value);
        self.pending_paint = false;
        true
    }

    /// Pointer or touch pressed on the control.
    pub fn press(&mut self, kind: PointerKind) -> Option<RangeEvent> {
        if !self.enabled {
            return None;
        }

        trace!(?kind, "Range control pressed");
        self.start_seeking()
    }

    /// Platform value change during a drag.
    ///
    /// Ignored outside a seek session; some platforms deliver a late input
    /// event after the release.
    pub fn seek(&mut self, value: f64) -> Option<RangeEvent> {
        if !self.enabled || !self.seek_state.is_seeking() {
            trace!(value, "Suppressed seek outside seek session");
            return None;
        }
        if !value.is_finite() {
            return None;
        }

        self.set_value(value);
        Some(RangeEvent::Seeked { value: self.value })
    }

    /// Pointer or touch released.
    pub fn release(&mut self) -> Option<RangeEvent> {
        let next = self.seek_state.transition_to(SeekState::Idle).ok()?;
        self.seek_state = next;
        self.hold_count = 0;
        Some(RangeEvent::Ended { value: self.value })
    }

    /// Key pressed while focused. Unhandled keys produce no events.
    pub fn key_down(&mut self, key: Key) -> Vec<RangeEvent> {
        let mut events = Vec::new();
        if !self.enabled || !key.is_navigation() {
            return events;
        }

        if let Some(started) = self.start_seeking() {
            events.push(started);
        }

        match key {
            Key::ArrowLeft => self.set_value(self.value - hold_step(self.hold_count)),
            Key::ArrowRight => self.set_value(self.value + hold_step(self.hold_count)),
            Key::Home => self.set_value(0.0),
            Key::End => self.set_value(self.max_value),
            Key::Other => {}
        }
        self.hold_count = self.hold_count.saturating_add(1);

        events.push(RangeEvent::Seeked { value: self.value });
        events
    }

    /// Key released.
    pub fn key_up(&mut self) -> Option<RangeEvent> {
        self.release()
    }

    fn start_seeking(&mut self) -> Option<RangeEvent> {
        let next = self.seek_state.transition_to(SeekState::Seeking).ok()?;
        self.seek_state = next;
        Some(RangeEvent::Started)
    }

    fn update_fill_ratio(&mut self) {
        let span = self.max_value - self.min_value;
        self.fill_ratio = if span > 0.0 {
            ((self.value - self.min_value) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control() -> RangeControl {
        RangeControl::new(RangeControlParams::new(0.0, 100.0))
    }

    // Value handling

    #[test]
    fn new_defaults_to_non_negative_minimum() {
        let c = RangeControl::new(RangeControlParams::new(-10.0, 100.0));
        assert_eq!(c.value(), 0.0);

        let c = RangeControl::new(RangeControlParams::new(5.0, 100.0));
        assert_eq!(c.value(), 5.0);
    }

    #[test]
    fn new_replaces_non_finite_minimum_with_zero() {
        let c = RangeControl::new(RangeControlParams::new(f64::NAN, 100.0).with_initial_value(40.0));
        assert_eq!(c.min_value(), 0.0);
        assert_eq!(c.value(), 40.0);
    }

    #[test]
    fn new_uses_clamped_initial_value() {
        let c = RangeControl::new(RangeControlParams::new(0.0, 100.0).with_initial_value(250.0));
        assert_eq!(c.value(), 100.0);
        assert_eq!(c.painted_value(), 100.0);
    }

    #[test]
    fn set_value_clamps_to_range() {
        let mut c = control();
        c.set_value(150.0);
        assert_eq!(c.value(), 100.0);
        c.set_value(-3.0);
        assert_eq!(c.value(), 0.0);
    }

    #[test]
    fn set_value_ignores_non_finite() {
        let mut c = control();
        c.set_value(40.0);
        c.set_value(f64::NAN);
        c.set_value(f64::INFINITY);
        assert_eq!(c.value(), 40.0);
    }

    #[test]
    fn set_max_value_rejects_below_minimum() {
        let mut c = RangeControl::new(RangeControlParams::new(10.0, 100.0));
        assert!(!c.set_max_value(5.0));
        assert_eq!(c.max_value(), 100.0);
    }

    #[test]
    fn set_max_value_recomputes_fill_ratio() {
        let mut c = control();
        c.set_value(50.0);
        assert!((c.fill_ratio() - 0.5).abs() < f64::EPSILON);

        assert!(c.set_max_value(1000.0));
        assert!((c.fill_ratio() - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn set_max_value_below_value_pulls_value_down() {
        let mut c = control();
        c.set_value(80.0);
        c.set_max_value(50.0);
        assert_eq!(c.value(), 50.0);
        assert_eq!(c.fill_ratio(), 1.0);
    }

    #[test]
    fn fill_ratio_is_zero_for_empty_span() {
        let c = RangeControl::new(RangeControlParams::new(5.0, 5.0));
        assert_eq!(c.fill_ratio(), 0.0);
    }

    #[test]
    fn reset_returns_to_minimum() {
        let mut c = RangeControl::new(RangeControlParams::new(2.0, 100.0));
        c.set_value(70.0);
        c.reset();
        assert_eq!(c.value(), 2.0);
    }

    // Paint deferral

    #[test]
    fn painted_value_lags_until_paint() {
        let mut c = control();
        c.set_value(30.0);
        assert_eq!(c.painted_value(), 0.0);
        assert!(c.has_pending_paint());

        assert!(c.paint());
        assert_eq!(c.painted_value(), 30.0);
        assert!(!c.paint());
    }

    #[test]
    fn paint_after_ceiling_change_shows_value_within_new_ceiling() {
        let mut c = control();
        c.set_max_value(1000.0);
        c.set_value(640.0);
        c.paint();
        assert_eq!(c.painted_value(), 640.0);
    }

    // Seek lifecycle

    #[test]
    fn press_seek_release_emits_started_seeked_ended() {
        let mut c = control();
        assert_eq!(c.press(PointerKind::Mouse), Some(RangeEvent::Started));
        assert_eq!(c.seek(42.0), Some(RangeEvent::Seeked { value: 42.0 }));
        assert_eq!(c.release(), Some(RangeEvent::Ended { value: 42.0 }));
        assert_eq!(c.seek_state(), SeekState::Idle);
    }

    #[test]
    fn seek_after_release_is_suppressed() {
        let mut c = control();
        c.press(PointerKind::Touch);
        c.seek(10.0);
        c.release();

        assert_eq!(c.seek(99.0), None);
        assert_eq!(c.value(), 10.0);
    }

    #[test]
    fn release_while_idle_emits_nothing() {
        let mut c = control();
        assert_eq!(c.release(), None);
    }

    #[test]
    fn second_press_does_not_restart() {
        let mut c = control();
        c.press(PointerKind::Mouse);
        assert_eq!(c.press(PointerKind::Mouse), None);
    }

    #[test]
    fn disabled_control_ignores_interaction() {
        let mut c = control();
        c.disable();
        assert_eq!(c.press(PointerKind::Mouse), None);
        assert!(c.key_down(Key::ArrowRight).is_empty());

        c.enable();
        assert_eq!(c.press(PointerKind::Mouse), Some(RangeEvent::Started));
    }

    // Keyboard

    #[test]
    fn arrow_key_starts_then_seeks() {
        let mut c = control();
        let events = c.key_down(Key::ArrowRight);
        assert_eq!(
            events,
            vec![RangeEvent::Started, RangeEvent::Seeked { value: 1.0 }]
        );
    }

    #[test]
    fn held_arrow_key_accelerates() {
        let mut c = control();
        c.key_down(Key::ArrowRight); // +1
        c.key_down(Key::ArrowRight); // +max(1, ln 2) = +1
        let events = c.key_down(Key::ArrowRight); // +ln 3
        assert_eq!(events.len(), 1);
        let expected = 2.0 + 3f64.ln();
        assert!((c.value() - expected).abs() < 1e-12);
    }

    #[test]
    fn key_up_resets_acceleration() {
        let mut c = control();
        for _ in 0..10 {
            c.key_down(Key::ArrowRight);
        }
        assert!(matches!(c.key_up(), Some(RangeEvent::Ended { .. })));

        let before = c.value();
        c.key_down(Key::ArrowRight);
        assert!((c.value() - before - 1.0).abs() < 1e-12);
    }

    #[test]
    fn home_and_end_jump_to_bounds() {
        let mut c = control();
        c.key_down(Key::End);
        assert_eq!(c.value(), 100.0);
        c.key_down(Key::Home);
        assert_eq!(c.value(), 0.0);
    }

    #[test]
    fn arrow_left_stops_at_minimum() {
        let mut c = control();
        c.key_down(Key::ArrowLeft);
        assert_eq!(c.value(), 0.0);
    }

    #[test]
    fn unhandled_key_does_not_start_seeking() {
        let mut c = control();
        assert!(c.key_down(Key::Other).is_empty());
        assert_eq!(c.seek_state(), SeekState::Idle);
        assert_eq!(c.key_up(), None);
    }
}
