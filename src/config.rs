use std::{env, path::PathBuf, str::FromStr, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

/// What to do when a placeholder token is absent from the page template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubstitutionMode {
    /// Skip the substitution and log a warning.
    #[default]
    Lenient,
    /// Fail the materialization.
    Strict,
}

impl FromStr for SubstitutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(SubstitutionMode::Lenient),
            "strict" => Ok(SubstitutionMode::Strict),
            other => Err(format!("unknown substitution mode '{other}'")),
        }
    }
}

/// How caller-supplied text is inserted into the page template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextEscaping {
    #[default]
    Verbatim,
    Html,
}

impl FromStr for TextEscaping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbatim" => Ok(TextEscaping::Verbatim),
            "html" => Ok(TextEscaping::Html),
            other => Err(format!("unknown text escaping '{other}'")),
        }
    }
}

/// When the page template is read from disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TemplateReloadPolicy {
    #[default]
    PerRequest,
    Once,
}

impl FromStr for TemplateReloadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per_request" | "per-request" => Ok(TemplateReloadPolicy::PerRequest),
            "once" => Ok(TemplateReloadPolicy::Once),
            other => Err(format!("unknown template reload policy '{other}'")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub openai_model: String,
    pub openai_temperature: f32,
    pub model_timeout_secs: u64,
    pub template_path: PathBuf,
    pub template_reload: TemplateReloadPolicy,
    pub quiz_output_dir: PathBuf,
    pub quiz_public_base_url: String,
    pub substitution_mode: SubstitutionMode,
    pub text_escaping: TextEscaping,
    pub max_request_bytes: usize,
    pub web_server_host: String,
    pub web_server_port: u16,
    /// Mode variables that were set but could not be parsed.
    pub invalid_settings: Vec<String>,
}

fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Parses a mode variable, recording unparsable values in `invalid` and
/// falling back to the default.
fn mode_setting<T>(name: &str, raw: Option<String>, invalid: &mut Vec<String>) -> T
where
    T: FromStr<Err = String> + Default,
{
    let Some(raw) = raw else {
        return T::default();
    };

    raw.parse().unwrap_or_else(|err| {
        log::warn!("{}: {}", name, err);
        invalid.push(format!("{name}: {err}"));
        T::default()
    })
}

impl Config {
    pub fn from_env() -> Self {
        let mut invalid_settings = Vec::new();
        let template_reload = mode_setting(
            "QUIZ_TEMPLATE_RELOAD",
            env::var("QUIZ_TEMPLATE_RELOAD").ok(),
            &mut invalid_settings,
        );
        let substitution_mode = mode_setting(
            "TEMPLATE_SUBSTITUTION",
            env::var("TEMPLATE_SUBSTITUTION").ok(),
            &mut invalid_settings,
        );
        let text_escaping = mode_setting(
            "TEMPLATE_TEXT_ESCAPING",
            env::var("TEMPLATE_TEXT_ESCAPING").ok(),
            &mut invalid_settings,
        );

        Self {
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE").ok().filter(|b| !b.is_empty()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            openai_temperature: parsed_var("OPENAI_TEMPERATURE").unwrap_or(0.7),
            model_timeout_secs: parsed_var("MODEL_TIMEOUT_SECS").unwrap_or(120),
            template_path: env::var("QUIZ_TEMPLATE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public/quizmaster.html")),
            template_reload,
            quiz_output_dir: env::var("QUIZ_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public/quiz")),
            quiz_public_base_url: env::var("QUIZ_PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/public/quiz".to_string()),
            substitution_mode,
            text_escaping,
            max_request_bytes: parsed_var("MAX_REQUEST_BYTES").unwrap_or(2 * 1024 * 1024),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: parsed_var("PORT")
                .or_else(|| parsed_var("WEB_SERVER_PORT"))
                .unwrap_or(8080),
            invalid_settings,
        }
    }

    pub fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout_secs)
    }

    pub fn has_api_key(&self) -> bool {
        !self.openai_api_key.expose_secret().trim().is_empty()
    }

    /// Rejects settings the server cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if !self.invalid_settings.is_empty() {
            return Err(AppError::Configuration(self.invalid_settings.join("; ")));
        }

        if !self.has_api_key() {
            return Err(AppError::Configuration(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.openai_temperature) {
            return Err(AppError::Configuration(format!(
                "OPENAI_TEMPERATURE must be between 0.0 and 2.0, got {}",
                self.openai_temperature
            )));
        }

        if self.model_timeout_secs == 0 {
            return Err(AppError::Configuration(
                "MODEL_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        if self.quiz_public_base_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "QUIZ_PUBLIC_BASE_URL must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("test-openai-key".to_string()),
            openai_api_base: None,
            openai_model: "gpt-4o".to_string(),
            openai_temperature: 0.7,
            model_timeout_secs: 5,
            template_path: PathBuf::from("public/quizmaster.html"),
            template_reload: TemplateReloadPolicy::PerRequest,
            quiz_output_dir: PathBuf::from("public/quiz"),
            quiz_public_base_url: "https://quiz.example.com/public/quiz".to_string(),
            substitution_mode: SubstitutionMode::Lenient,
            text_escaping: TextEscaping::Verbatim,
            max_request_bytes: 64 * 1024,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            invalid_settings: Vec::new(),
        }
    }
}
