//! Seek lifecycle of a range control.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Whether a range control is between a press and its release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeekState {
    /// No drag or key hold in progress.
    #[default]
    Idle,
    /// Pointer, touch or navigation key is held.
    Seeking,
}

impl SeekState {
    /// Returns true while a seek session is active.
    pub fn is_seeking(&self) -> bool {
        matches!(self, SeekState::Seeking)
    }
}

impl StateMachine for SeekState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SeekState::*;
        matches!((self, target), (Idle, Seeking) | (Seeking, Idle))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SeekState::*;
        match self {
            Idle => vec![Seeking],
            Seeking => vec![Idle],
        }
    }
}

impl fmt::Display for SeekState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeekState::Idle => "idle",
            SeekState::Seeking => "seeking",
        };
        write!(f, "{}", s)
    }
}
