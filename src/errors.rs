use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failures of the model call or of the model's output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationFailure {
    #[error("model call failed: {0}")]
    ModelCall(String),

    #[error("unparsable model output: {0}")]
    Unparsable(String),

    #[error("invalid quiz shape: {0}")]
    InvalidShape(String),
}

/// Failures while turning quiz data into a persisted page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterializationFailure {
    #[error("invalid quiz format from generator: {0}")]
    InvalidGeneratorOutput(String),

    #[error("template unavailable: {0}")]
    TemplateUnavailable(String),

    #[error("template placeholder missing: {0}")]
    PlaceholderMissing(&'static str),

    #[error("quiz data could not be encoded: {0}")]
    QuizEncoding(String),

    #[error("artifact write failed: {0}")]
    ArtifactWriteFailed(String),
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Generation error: {0}")]
    Generation(GenerationFailure),

    #[error("Materialization error: {0}")]
    Materialization(MaterializationFailure),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Generation(_) => "GENERATION_ERROR",
            AppError::Materialization(_) => "MATERIALIZATION_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::Materialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<GenerationFailure> for AppError {
    fn from(err: GenerationFailure) -> Self {
        AppError::Generation(err)
    }
}

impl From<MaterializationFailure> for AppError {
    fn from(err: MaterializationFailure) -> Self {
        AppError::Materialization(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::Generation(GenerationFailure::ModelCall(err.to_string()))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::InvalidInput("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Generation(GenerationFailure::ModelCall("down".into())).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Materialization(MaterializationFailure::TemplateUnavailable(
                "gone".into()
            ))
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::from(GenerationFailure::Unparsable("expected value".into()));
        assert_eq!(
            err.to_string(),
            "Generation error: unparsable model output: expected value"
        );

        let err = AppError::from(MaterializationFailure::PlaceholderMissing("{{TRANSCRIPT}}"));
        assert_eq!(
            err.to_string(),
            "Materialization error: template placeholder missing: {{TRANSCRIPT}}"
        );
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            AppError::InvalidInput(String::new()).error_code(),
            AppError::Generation(GenerationFailure::InvalidShape(String::new())).error_code(),
            AppError::Materialization(MaterializationFailure::ArtifactWriteFailed(String::new()))
                .error_code(),
            AppError::Configuration(String::new()).error_code(),
        ];
        let mut deduped = codes.to_vec();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), codes.len());
    }
}
