use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CHOICES_PER_QUESTION: usize = 4;

/// One multiple-choice question as produced by the model.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// The question text.
    pub question: String,
    /// Exactly four answer choices, in display order.
    #[serde(alias = "options")]
    pub choices: Vec<String>,
    /// Zero-based index of the correct choice.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "correct_index")]
    pub correct_index: Option<usize>,
    /// Text of the correct choice, identical to one entry of `choices`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "correct_answer",
        alias = "answer"
    )]
    pub correct_answer: Option<String>,
}

/// Reasons a parsed quiz does not match the fixed shape.
///
/// Question numbers are one-based so they read naturally in error payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizShapeError {
    #[error("expected {expected} questions, found {found}")]
    WrongQuestionCount { expected: usize, found: usize },

    #[error("question {question}: expected {expected} choices, found {found}")]
    WrongChoiceCount {
        question: usize,
        expected: usize,
        found: usize,
    },

    #[error("question {question}: text is blank")]
    BlankQuestion { question: usize },

    #[error("question {question}: choice {choice} is blank")]
    BlankChoice { question: usize, choice: usize },

    #[error("question {question}: no correct answer marked")]
    MissingCorrectMarker { question: usize },

    #[error("question {question}: correct index {index} is out of range")]
    CorrectIndexOutOfRange { question: usize, index: usize },

    #[error("question {question}: correct answer is not one of the choices")]
    CorrectAnswerNotAChoice { question: usize },

    #[error("question {question}: correct answer matches more than one choice")]
    AmbiguousCorrectAnswer { question: usize },

    #[error("question {question}: correct index and correct answer disagree")]
    ConflictingCorrectMarkers { question: usize },
}

impl QuizQuestion {
    /// Checks the question against the four-choice contract and returns the
    /// index of its single correct choice.
    pub fn validate(&self, question: usize) -> Result<usize, QuizShapeError> {
        if self.question.trim().is_empty() {
            return Err(QuizShapeError::BlankQuestion { question });
        }

        if self.choices.len() != CHOICES_PER_QUESTION {
            return Err(QuizShapeError::WrongChoiceCount {
                question,
                expected: CHOICES_PER_QUESTION,
                found: self.choices.len(),
            });
        }

        if let Some(blank) = self.choices.iter().position(|c| c.trim().is_empty()) {
            return Err(QuizShapeError::BlankChoice {
                question,
                choice: blank + 1,
            });
        }

        let by_index = match self.correct_index {
            Some(index) if index >= CHOICES_PER_QUESTION => {
                return Err(QuizShapeError::CorrectIndexOutOfRange { question, index });
            }
            other => other,
        };

        let by_answer = match &self.correct_answer {
            Some(answer) => {
                let mut matching = self
                    .choices
                    .iter()
                    .enumerate()
                    .filter(|(_, choice)| choice.trim() == answer.trim())
                    .map(|(i, _)| i);
                match (matching.next(), matching.next()) {
                    (None, _) => return Err(QuizShapeError::CorrectAnswerNotAChoice { question }),
                    (Some(_), Some(_)) => {
                        return Err(QuizShapeError::AmbiguousCorrectAnswer { question })
                    }
                    (Some(i), None) => Some(i),
                }
            }
            None => None,
        };

        match (by_index, by_answer) {
            (Some(i), Some(a)) if i != a => {
                Err(QuizShapeError::ConflictingCorrectMarkers { question })
            }
            (Some(i), _) | (None, Some(i)) => Ok(i),
            (None, None) => Err(QuizShapeError::MissingCorrectMarker { question }),
        }
    }
}
