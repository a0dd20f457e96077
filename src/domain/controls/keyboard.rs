//! Keyboard navigation for range controls.

use serde::{Deserialize, Serialize};

/// Keys a range control reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    /// Any key the control does not handle.
    Other,
}

impl Key {
    /// Maps a platform key code (`KeyboardEvent.code`) to a key.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => Key::Other,
        }
    }

    /// Returns true for keys that move the control.
    pub fn is_navigation(&self) -> bool {
        !matches!(self, Key::Other)
    }
}

/// Step size for an arrow key that has been held for `hold_count` repeats.
///
/// Grows logarithmically so long holds cross large ranges quickly,
/// never dropping below one unit.
pub fn hold_step(hold_count: u32) -> f64 {
    f64::max(1.0, (f64::from(hold_count) + 1.0).ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_maps_navigation_keys() {
        assert_eq!(Key::from_code("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_code("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_code("Home"), Key::Home);
        assert_eq!(Key::from_code("End"), Key::End);
        assert_eq!(Key::from_code("KeyA"), Key::Other);
    }

    #[test]
    fn other_is_not_navigation() {
        assert!(!Key::Other.is_navigation());
        assert!(Key::Home.is_navigation());
    }

    #[test]
    fn hold_step_starts_at_one() {
        assert_eq!(hold_step(0), 1.0);
        assert_eq!(hold_step(1), 1.0);
    }

    #[test]
    fn hold_step_grows_logarithmically() {
        // ln(3) > 1
        assert!((hold_step(2) - 3f64.ln()).abs() < 1e-12);
        assert!(hold_step(100) > hold_step(10));
        assert!((hold_step(99) - 100f64.ln()).abs() < 1e-12);
    }
}
