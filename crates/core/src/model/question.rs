use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::Year;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question {year}/{part}/{index} has no options")]
    NoOptions { year: Year, part: Part, index: u32 },

    #[error("question {year}/{part}/{index} has an empty answer set")]
    EmptyAnswerSet { year: Year, part: Part, index: u32 },
}

//
// ─── PART ──────────────────────────────────────────────────────────────────────
//

/// Exam sitting. Morning sorts before afternoon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Part {
    #[serde(rename = "午前")]
    Morning,
    #[serde(rename = "午後")]
    Afternoon,
}

impl Part {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Part::Morning => "午前",
            Part::Afternoon => "午後",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── ANSWER ────────────────────────────────────────────────────────────────────
//

/// Expected answer of a question: one option text, or a set of acceptable ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    AnySet(Vec<String>),
}

impl Answer {
    /// Whether `value` is an acceptable answer. Comparison is exact and case-sensitive.
    #[must_use]
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Answer::Single(expected) => expected == value,
            Answer::AnySet(expected) => expected.iter().any(|e| e == value),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Answer::Single(expected) => std::slice::from_ref(expected),
            Answer::AnySet(expected) => expected,
        };
        slice.iter().map(String::as_str)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.values().collect::<Vec<_>>().join(" または ");
        f.write_str(&joined)
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One record of a yearly question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub year: Year,
    pub part: Part,
    pub index: u32,
    pub category: String,
    pub question: String,
    pub options: Vec<String>,
    pub answer: Answer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_images: Option<Vec<Option<String>>>,
}

impl Question {
    /// Checks the record invariants that deserialization alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::NoOptions` when `options` is empty and
    /// `QuestionError::EmptyAnswerSet` when a set-valued answer has no members.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions {
                year: self.year,
                part: self.part,
                index: self.index,
            });
        }
        if matches!(&self.answer, Answer::AnySet(values) if values.is_empty()) {
            return Err(QuestionError::EmptyAnswerSet {
                year: self.year,
                part: self.part,
                index: self.index,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn is_correct(&self, value: &str) -> bool {
        self.answer.accepts(value)
    }

    /// Image attached to the option at `option_index`, if any.
    #[must_use]
    pub fn option_image(&self, option_index: usize) -> Option<&str> {
        self.option_images
            .as_ref()?
            .get(option_index)?
            .as_deref()
            .filter(|path| !path.is_empty())
    }

    /// Case-insensitive substring search over the question text and every option.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.question.to_lowercase().contains(needle)
            || self
                .options
                .iter()
                .any(|option| option.to_lowercase().contains(needle))
    }

    /// Expected answers that do not match any option text.
    #[must_use]
    pub fn unmatched_answers(&self) -> Vec<&str> {
        self.answer
            .values()
            .filter(|value| !self.options.iter().any(|option| option == value))
            .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
