//! Turns raw model text into [`QuizData`].
//!
//! Model output is treated as untrusted text: surrounding code fences are
//! removed, the remainder is parsed as JSON and then fully shape-checked.
//! The stage reports which of those steps failed through [`QuizParseOutcome`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::GenerationFailure,
    models::domain::{QuizData, QuizQuestion},
};

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A```[[:alnum:]_+-]*[ \t]*\r?\n?(.*?)\r?\n?[ \t]*```\z")
        .expect("CODE_FENCE is a valid regex pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizParseOutcome {
    Valid(QuizData),
    /// Not syntactically valid JSON.
    Unparsable(String),
    /// Valid JSON that is not a ten-question quiz.
    InvalidShape(String),
}

impl QuizParseOutcome {
    pub fn from_model_output(raw: &str) -> Self {
        let body = strip_code_fence(raw);

        let value: serde_json::Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(err) => return QuizParseOutcome::Unparsable(err.to_string()),
        };

        let questions: Vec<QuizQuestion> = match serde_json::from_value(value) {
            Ok(questions) => questions,
            Err(err) => return QuizParseOutcome::InvalidShape(err.to_string()),
        };

        match QuizData::try_from(questions) {
            Ok(quiz) => QuizParseOutcome::Valid(quiz),
            Err(err) => QuizParseOutcome::InvalidShape(err.to_string()),
        }
    }

    pub fn into_result(self) -> Result<QuizData, GenerationFailure> {
        match self {
            QuizParseOutcome::Valid(quiz) => Ok(quiz),
            QuizParseOutcome::Unparsable(reason) => Err(GenerationFailure::Unparsable(reason)),
            QuizParseOutcome::InvalidShape(reason) => Err(GenerationFailure::InvalidShape(reason)),
        }
    }
}

/// Removes a surrounding markdown code fence, labeled or not.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    match CODE_FENCE.captures(trimmed).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str().trim(),
        None => trimmed,
    }
}
