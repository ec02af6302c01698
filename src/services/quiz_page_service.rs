use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppResult, MaterializationFailure},
    models::{
        domain::QUIZ_QUESTION_COUNT,
        dto::{request::CreateQuizRequest, response::CreateQuizResponse},
    },
    repositories::{ArtifactRepository, TemplateRepository},
    services::{
        page_renderer::{PageRenderer, QuizPage},
        quiz_generator_service::QuizGenerator,
        video_url::normalize_video_url,
    },
};

/// Generates a quiz for a transcript and publishes it as a standalone page.
pub struct QuizPageService {
    generator: Arc<dyn QuizGenerator>,
    templates: Arc<dyn TemplateRepository>,
    artifacts: Arc<dyn ArtifactRepository>,
    renderer: PageRenderer,
    public_base_url: String,
}

impl QuizPageService {
    pub fn new(
        generator: Arc<dyn QuizGenerator>,
        templates: Arc<dyn TemplateRepository>,
        artifacts: Arc<dyn ArtifactRepository>,
        renderer: PageRenderer,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            generator,
            templates,
            artifacts,
            renderer,
            public_base_url: public_base_url.into(),
        }
    }

    pub fn quiz_url(&self, quiz_filename: &str) -> String {
        format!(
            "{}/{}",
            self.public_base_url.trim_end_matches('/'),
            quiz_filename
        )
    }

    /// Runs the whole pipeline for one request. Nothing is written unless
    /// every earlier step succeeded; an existing page with the same file name
    /// is replaced.
    pub async fn create_quiz_page(&self, request: CreateQuizRequest) -> AppResult<CreateQuizResponse> {
        request.validate()?;

        let video_url = normalize_video_url(&request.video_url);
        let quiz = self.generator.generate(&request.transcript).await?;

        if quiz.len() != QUIZ_QUESTION_COUNT {
            return Err(MaterializationFailure::InvalidGeneratorOutput(format!(
                "expected {} questions, found {}",
                QUIZ_QUESTION_COUNT,
                quiz.len()
            ))
            .into());
        }
        quiz.validate()
            .map_err(|e| MaterializationFailure::InvalidGeneratorOutput(e.to_string()))?;

        let template = self.templates.load().await?;
        let page = self.renderer.render(
            &template,
            &QuizPage {
                video_description: &request.video_description,
                video_url: &video_url,
                transcript: &request.transcript,
                quiz: &quiz,
            },
        )?;

        self.artifacts.write(&request.quiz_filename, &page).await?;

        let quiz_url = self.quiz_url(&request.quiz_filename);
        log::info!("Published quiz page {}", quiz_url);
        Ok(CreateQuizResponse::new(quiz_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::{AppError, GenerationFailure},
        services::quiz_generator_service::MockQuizGenerator,
        test_utils::fixtures::{extract_quiz_literal, sample_quiz_data, sample_template},
    };
    use async_trait::async_trait;
    use std::{
        collections::HashMap,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Mutex,
        },
    };

    struct StaticTemplate {
        template: Option<String>,
        loads: AtomicUsize,
    }

    impl StaticTemplate {
        fn new(template: Option<String>) -> Arc<Self> {
            Arc::new(Self {
                template,
                loads: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TemplateRepository for StaticTemplate {
        async fn load(&self) -> AppResult<Arc<str>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.template.as_deref().map(Arc::from).ok_or_else(|| {
                MaterializationFailure::TemplateUnavailable("no template".to_string()).into()
            })
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        files: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl ArtifactRepository for RecordingStore {
        async fn write(&self, filename: &str, contents: &str) -> AppResult<()> {
            self.files
                .lock()
                .unwrap()
                .insert(filename.to_string(), contents.to_string());
            Ok(())
        }
    }

    fn request() -> CreateQuizRequest {
        CreateQuizRequest {
            video_url: "https://youtube.com/watch?v=ABC123&t=30".to_string(),
            video_description: "Orbital mechanics, part 1".to_string(),
            transcript: "Kepler's laws describe planetary orbits.".to_string(),
            quiz_filename: "orbits.html".to_string(),
        }
    }

    fn generator_returning_sample() -> Arc<MockQuizGenerator> {
        let mut generator = MockQuizGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Ok(sample_quiz_data()));
        Arc::new(generator)
    }

    fn service(
        generator: Arc<MockQuizGenerator>,
        templates: Arc<StaticTemplate>,
        store: Arc<RecordingStore>,
    ) -> QuizPageService {
        QuizPageService::new(
            generator,
            templates,
            store,
            PageRenderer::default(),
            "https://quiz.example.com/public/quiz/",
        )
    }

    #[actix_web::test]
    async fn publishes_rendered_page_and_returns_url() {
        let store = Arc::new(RecordingStore::default());
        let service = service(
            generator_returning_sample(),
            StaticTemplate::new(Some(sample_template())),
            store.clone(),
        );

        let response = service.create_quiz_page(request()).await.unwrap();
        assert!(response.success);
        assert_eq!(
            response.quiz_url,
            "https://quiz.example.com/public/quiz/orbits.html"
        );

        let files = store.files.lock().unwrap();
        let page = files.get("orbits.html").expect("page should be written");
        assert!(page.contains("Orbital mechanics, part 1"));
        assert!(page.contains("Kepler's laws describe planetary orbits."));
        assert!(page.contains("https://www.youtube.com/embed/ABC123\""));
        assert_eq!(extract_quiz_literal(page), sample_quiz_data());
    }

    #[actix_web::test]
    async fn missing_filename_stops_before_any_work() {
        let mut generator = MockQuizGenerator::new();
        generator.expect_generate().never();
        let templates = StaticTemplate::new(Some(sample_template()));
        let store = Arc::new(RecordingStore::default());
        let service = service(Arc::new(generator), templates.clone(), store.clone());

        let mut request = request();
        request.quiz_filename.clear();

        let err = service.create_quiz_page(request).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(templates.loads.load(Ordering::SeqCst), 0);
        assert!(store.files.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn generator_errors_propagate_unchanged() {
        let mut generator = MockQuizGenerator::new();
        generator.expect_generate().times(1).returning(|_| {
            Err(GenerationFailure::InvalidShape("expected 10 questions, found 3".to_string()).into())
        });
        let templates = StaticTemplate::new(Some(sample_template()));
        let store = Arc::new(RecordingStore::default());
        let service = service(Arc::new(generator), templates.clone(), store.clone());

        let err = service.create_quiz_page(request()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Generation(GenerationFailure::InvalidShape(_))
        ));
        assert_eq!(templates.loads.load(Ordering::SeqCst), 0);
        assert!(store.files.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn unreadable_template_writes_nothing() {
        let store = Arc::new(RecordingStore::default());
        let service = service(generator_returning_sample(), StaticTemplate::new(None), store.clone());

        let err = service.create_quiz_page(request()).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Materialization(MaterializationFailure::TemplateUnavailable(_))
        ));
        assert!(store.files.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn quiz_url_joins_base_and_filename_once() {
        let service = QuizPageService::new(
            Arc::new(MockQuizGenerator::new()),
            StaticTemplate::new(None),
            Arc::new(RecordingStore::default()),
            PageRenderer::default(),
            "https://host/public/quiz",
        );
        assert_eq!(service.quiz_url("q.html"), "https://host/public/quiz/q.html");
    }
}
