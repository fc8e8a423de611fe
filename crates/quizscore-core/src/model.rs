//! Core data model types for quizscore.
//!
//! An answer sequence is append-only: once submitted, an answer's text,
//! grade and group never change. Only `checked` and the derived `weight`
//! move.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Correctness classification of an answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Grade {
    True,
    PartiallyTrue,
    PartiallyFalse,
    False,
}

impl Grade {
    /// All grades, from most to least correct.
    pub const ALL: [Grade; 4] = [
        Grade::True,
        Grade::PartiallyTrue,
        Grade::PartiallyFalse,
        Grade::False,
    ];

    /// The fixed coefficient split across all answers holding this grade.
    pub fn coefficient(self) -> f64 {
        match self {
            Grade::True => 1.0,
            Grade::PartiallyTrue => 0.5,
            Grade::PartiallyFalse => -0.5,
            Grade::False => -1.0,
        }
    }

    /// Whether checked answers of this grade count towards the positive sum.
    pub fn is_positive(self) -> bool {
        matches!(self, Grade::True | Grade::PartiallyTrue)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::True => write!(f, "TRUE"),
            Grade::PartiallyTrue => write!(f, "PARTIALLY_TRUE"),
            Grade::PartiallyFalse => write!(f, "PARTIALLY_FALSE"),
            Grade::False => write!(f, "FALSE"),
        }
    }
}

impl FromStr for Grade {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "TRUE" => Ok(Grade::True),
            "PARTIALLY_TRUE" => Ok(Grade::PartiallyTrue),
            "PARTIALLY_FALSE" => Ok(Grade::PartiallyFalse),
            "FALSE" => Ok(Grade::False),
            _ => Err(ValidationError::UnknownGrade(s.to_string())),
        }
    }
}

/// A single answer option in the sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// The answer's label.
    pub text: String,
    /// How correct this answer is.
    #[serde(alias = "correct")]
    pub grade: Grade,
    /// Derived scoring contribution. Recomputed on every append.
    #[serde(default)]
    pub weight: f64,
    /// Whether the answer is currently selected.
    #[serde(default)]
    pub checked: bool,
    /// Mutual-exclusion group. `None` means not grouped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl Answer {
    /// The group this answer belongs to, ignoring empty ids.
    pub fn group(&self) -> Option<&str> {
        self.group_id.as_deref().filter(|g| !g.is_empty())
    }
}

/// A candidate answer carried by a submit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerDraft {
    pub text: String,
    pub grade: Grade,
    #[serde(default)]
    pub group_id: Option<String>,
}

impl AnswerDraft {
    pub fn new(text: impl Into<String>, grade: Grade) -> Self {
        Self {
            text: text.into(),
            grade,
            group_id: None,
        }
    }

    /// Put the draft into a mutual-exclusion group. An empty id leaves it ungrouped.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = normalize_group(Some(group_id.into()));
        self
    }

    /// Build a draft from raw form values, validating the textual grade.
    pub fn parse(
        text: impl Into<String>,
        grade: &str,
        group_id: Option<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            text: text.into(),
            grade: grade.parse()?,
            group_id: normalize_group(group_id),
        })
    }
}

/// Treat an empty group id as "not grouped".
pub(crate) fn normalize_group(group_id: Option<String>) -> Option<String> {
    group_id.filter(|g| !g.is_empty())
}
