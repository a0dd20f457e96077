//! Widget capability ports - what a host runtime needs from an interactive widget.
//!
//! A host adapter (e.g. an H5P question wrapper) drives the widget through
//! these traits: it renders the view, saves and restores state, asks
//! whether the user has answered, and resets on request.

/// A widget that can return to its initial values.
pub trait Resettable {
    /// Notification type emitted while resetting.
    type Event;

    /// Resets every input to its minimum and recomputes derived values.
    fn reset(&mut self) -> Vec<Self::Event>;
}

/// A widget whose state can be saved, restored and rendered.
///
/// # Contract
///
/// - `set_current_state(current_state())` leaves all values unchanged
/// - `set_current_state` ignores entries it does not recognise and is a
///   no-op when nothing valid remains
pub trait StatefulWidget {
    type State;
    type View;
    type Event;

    /// Snapshot of everything a host needs to draw the widget.
    fn render(&self) -> Self::View;

    /// True once the user has changed any input.
    fn has_response(&self) -> bool;

    /// State to persist, or `None` if the widget has nothing to save.
    fn current_state(&self) -> Option<Self::State>;

    /// Restores saved state.
    fn set_current_state(&mut self, state: Self::State) -> Vec<Self::Event>;
}
