//! Placeholder tokens of the quiz page template. Each appears once in the
//! template and is replaced at its first occurrence.

pub const VIDEO_DESCRIPTION_PLACEHOLDER: &str = "{{VIDEO_DESCRIPTION}}";
pub const VIDEO_URL_PLACEHOLDER: &str = "{{VIDEO_URL}}";
pub const TRANSCRIPT_PLACEHOLDER: &str = "{{TRANSCRIPT}}";

/// The template's empty quiz initializer, replaced by the generated quiz.
pub const QUIZ_DATA_PLACEHOLDER: &str = "let quizData = [];";
pub const QUIZ_DATA_ASSIGNMENT_PREFIX: &str = "let quizData = ";
