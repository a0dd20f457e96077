//! Result values and their live feedback classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::content::Target;

/// Visual state of a result relative to its target's acceptable range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Acceptable,
    Unacceptable,
    /// The target gives no live feedback.
    #[default]
    Unclassified,
}

impl Feedback {
    /// Classifies a rounded result against a target.
    pub fn classify(target: &Target, value: i64) -> Self {
        if !target.gives_live_feedback {
            return Feedback::Unclassified;
        }

        if target.is_within_range(value) {
            Feedback::Acceptable
        } else {
            Feedback::Unacceptable
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Feedback::Acceptable => "acceptable",
            Feedback::Unacceptable => "unacceptable",
            Feedback::Unclassified => "unclassified",
        };
        write!(f, "{}", s)
    }
}

/// A rounded result with its feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultValue {
    pub value: i64,
    pub feedback: Feedback,
}

/// Read-only display of one target's result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultDisplay {
    current: Option<ResultValue>,
}

impl ResultDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value set, if any.
    pub fn current(&self) -> Option<ResultValue> {
        self.current
    }

    /// Shows a new result. `None` keeps the previous one.
    pub fn set(&mut self, result: Option<ResultValue>) -> bool {
        match result {
            Some(result) => {
                self.current = Some(result);
                true
            }
            None => false,
        }
    }
}
