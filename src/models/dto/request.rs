use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A quiz filename is a single path component inside the quiz directory.
static QUIZ_FILENAME_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$")
        .expect("QUIZ_FILENAME_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub transcript: String,
}

/// Input of the page-creation endpoint. Absent fields deserialize to empty
/// strings so that "missing" and "empty" are reported the same way.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "videoUrl is required"))]
    pub video_url: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "videoDescription is required"))]
    pub video_description: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "transcript is required"))]
    pub transcript: String,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 255, message = "quizFilename is required"),
        regex(
            path = *QUIZ_FILENAME_REGEX,
            message = "quizFilename must be a plain file name (letters, digits, '.', '_', '-')"
        )
    )]
    pub quiz_filename: String,
}
