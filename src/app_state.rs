use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{
        ArtifactRepository, FileSystemArtifactRepository, FileTemplateRepository,
        TemplateRepository,
    },
    services::{
        model_service::OpenAiChatModel,
        page_renderer::PageRenderer,
        quiz_generator_service::{GenerationSettings, QuizGenerator, QuizGeneratorService},
        quiz_page_service::QuizPageService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_generator: Arc<dyn QuizGenerator>,
    pub quiz_page_service: Arc<QuizPageService>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let model = Arc::new(OpenAiChatModel::new(
            &config.openai_api_key,
            config.openai_api_base.as_deref(),
        ));
        let quiz_generator: Arc<dyn QuizGenerator> = Arc::new(QuizGeneratorService::new(
            model,
            GenerationSettings::from_config(&config),
        ));

        let artifacts = Arc::new(FileSystemArtifactRepository::new(&config.quiz_output_dir));
        artifacts.ensure_root().await?;

        let templates = Arc::new(FileTemplateRepository::new(
            &config.template_path,
            config.template_reload,
        ));

        let renderer = PageRenderer::new(config.substitution_mode, config.text_escaping);

        Ok(Self::from_parts(
            config,
            quiz_generator,
            templates,
            artifacts,
            renderer,
        ))
    }

    /// Assembles the state from already-built collaborators.
    pub fn from_parts(
        config: Config,
        quiz_generator: Arc<dyn QuizGenerator>,
        templates: Arc<dyn TemplateRepository>,
        artifacts: Arc<dyn ArtifactRepository>,
        renderer: PageRenderer,
    ) -> Self {
        let quiz_page_service = Arc::new(QuizPageService::new(
            Arc::clone(&quiz_generator),
            templates,
            artifacts,
            renderer,
            config.quiz_public_base_url,
        ));

        Self {
            quiz_generator,
            quiz_page_service,
        }
    }
}
