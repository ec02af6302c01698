use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::{
    config::TemplateReloadPolicy,
    errors::{AppResult, MaterializationFailure},
};

/// Source of the read-only quiz page template.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn load(&self) -> AppResult<Arc<str>>;
}

pub struct FileTemplateRepository {
    path: PathBuf,
    policy: TemplateReloadPolicy,
    cached: OnceCell<Arc<str>>,
}

impl FileTemplateRepository {
    pub fn new(path: impl Into<PathBuf>, policy: TemplateReloadPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
            cached: OnceCell::new(),
        }
    }

    async fn read_from_disk(&self) -> AppResult<Arc<str>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            log::error!("Failed to read template {}: {}", self.path.display(), e);
            MaterializationFailure::TemplateUnavailable(format!(
                "{}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(Arc::from(contents))
    }
}

#[async_trait]
impl TemplateRepository for FileTemplateRepository {
    async fn load(&self) -> AppResult<Arc<str>> {
        match self.policy {
            TemplateReloadPolicy::PerRequest => self.read_from_disk().await,
            TemplateReloadPolicy::Once => self
                .cached
                .get_or_try_init(|| self.read_from_disk())
                .await
                .cloned(),
        }
    }
}
