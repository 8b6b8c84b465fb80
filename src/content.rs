//! Records exchanged with the generative-content service.
//!
//! The service itself lives outside this crate. These types only give its
//! JSON payloads a checked shape before a presentation layer renders them.

use serde::{Deserialize, Serialize};

/// A study card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
}

/// One answer of a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub text: String,
    pub is_correct: bool,
    /// Explanation shown once the option is picked
    pub feedback: String,
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    /// Index of the first option marked correct.
    pub fn correct_option(&self) -> Option<usize> {
        self.options.iter().position(|option| option.is_correct)
    }

    /// A question is usable when it has options and exactly one is correct.
    pub fn is_well_formed(&self) -> bool {
        !self.options.is_empty() && self.options.iter().filter(|o| o.is_correct).count() == 1
    }
}
