//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Stable identifier of a decision, supplied by the content author.
///
/// Survives save/restore, so it is never generated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionId(String);

impl DecisionId {
    /// Creates a DecisionId, rejecting blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("id"));
        }
        Ok(Self(value))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DecisionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DecisionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier linking a panel's label to its controls for assistive technology.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Wraps a generated id.
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_id_accepts_non_empty() {
        let id = DecisionId::new("budget").unwrap();
        assert_eq!(id.as_str(), "budget");
        assert_eq!(id.to_string(), "budget");
    }

    #[test]
    fn decision_id_rejects_blank() {
        assert_eq!(
            DecisionId::new("   "),
            Err(ValidationError::empty_field("id"))
        );
        assert!("".parse::<DecisionId>().is_err());
    }

    #[test]
    fn decision_id_serializes_transparently() {
        let id = DecisionId::new("d-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"d-1\"");
        let back: DecisionId = serde_json::from_str("\"d-1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn element_id_displays_inner_value() {
        let id = ElementId::from_string("label-7");
        assert_eq!(format!("{}", id), "label-7");
    }
}
