use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::{
    config::Config,
    constants::quiz_prompt::{quiz_user_prompt, QUIZ_SYSTEM_PROMPT},
    errors::{AppError, AppResult, GenerationFailure},
    models::domain::QuizData,
    services::{
        model_service::{ChatMessage, ChatModel, ChatRequest},
        quiz_parser::QuizParseOutcome,
    },
};

/// Produces a validated quiz from a transcript.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate(&self, transcript: &str) -> AppResult<QuizData>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

impl GenerationSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.openai_model.clone(),
            temperature: config.openai_temperature,
            timeout: config.model_timeout(),
        }
    }
}

pub struct QuizGeneratorService {
    model: Arc<dyn ChatModel>,
    settings: GenerationSettings,
}

impl QuizGeneratorService {
    pub fn new(model: Arc<dyn ChatModel>, settings: GenerationSettings) -> Self {
        Self { model, settings }
    }

    fn build_request(&self, transcript: &str) -> ChatRequest {
        ChatRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(QUIZ_SYSTEM_PROMPT.as_str()),
                ChatMessage::user(quiz_user_prompt(transcript)),
            ],
            temperature: self.settings.temperature,
        }
    }
}

#[async_trait]
impl QuizGenerator for QuizGeneratorService {
    async fn generate(&self, transcript: &str) -> AppResult<QuizData> {
        if transcript.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Transcript is required to generate quiz".to_string(),
            ));
        }

        let request = self.build_request(transcript);
        log::debug!(
            "Requesting quiz from model {} for transcript of {} bytes",
            request.model,
            transcript.len()
        );

        let raw = tokio::time::timeout(self.settings.timeout, self.model.complete(request))
            .await
            .map_err(|_| {
                GenerationFailure::ModelCall(format!(
                    "no response within {}s",
                    self.settings.timeout.as_secs()
                ))
            })??;

        log::debug!("Model replied with {} bytes", raw.len());

        let quiz = QuizParseOutcome::from_model_output(&raw)
            .into_result()
            .map_err(|failure| {
                log::warn!("Rejected model output: {}", failure);
                failure
            })?;

        log::info!("Generated quiz with {} questions", quiz.len());
        Ok(quiz)
    }
}
