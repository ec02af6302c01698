pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{api_test, health_check};
pub use quiz_handler::{create_quiz, generate_quiz};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(api_test)
        .service(generate_quiz)
        .service(create_quiz);
}

/// JSON extractor settings: transcripts need a larger body limit than the
/// default, and malformed bodies are reported as client input errors.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| AppError::InvalidInput(format!("Invalid JSON body: {}", err)).into())
}
