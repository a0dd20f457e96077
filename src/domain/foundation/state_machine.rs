//! State machine trait for interaction status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions, used by the range control's seek lifecycle.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// let next = SeekState::Idle.transition_to(SeekState::Seeking)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Gate {
        Open,
        Closed,
        Welded,
    }

    impl StateMachine for Gate {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Gate::*;
            matches!((self, target), (Open, Closed) | (Closed, Open) | (Closed, Welded))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Gate::*;
            match self {
                Open => vec![Closed],
                Closed => vec![Open, Welded],
                Welded => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Gate::Open.transition_to(Gate::Closed), Ok(Gate::Closed));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        assert!(Gate::Open.transition_to(Gate::Welded).is_err());
    }

    #[test]
    fn is_terminal_only_for_states_without_exits() {
        assert!(Gate::Welded.is_terminal());
        assert!(!Gate::Open.is_terminal());
    }
}
