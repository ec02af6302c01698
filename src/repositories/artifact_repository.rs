use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::{AppResult, MaterializationFailure};

/// Content store for rendered quiz pages, keyed by file name.
///
/// Writing an existing name replaces the previous artifact wholesale.
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    async fn write(&self, filename: &str, contents: &str) -> AppResult<()>;
}

/// Stores artifacts as files in a single directory.
///
/// Each write goes to a uniquely named temp file in the same directory that is
/// then renamed over the destination. The temp name does not embed the target
/// name, so any name the filesystem accepts can be written, so readers never see a partially written page and concurrent
/// writers of the same name resolve to whichever rename lands last.
pub struct FileSystemArtifactRepository {
    root: PathBuf,
}

impl FileSystemArtifactRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the artifact directory if it does not exist yet.
    pub async fn ensure_root(&self) -> AppResult<()> {
        log::info!("Ensuring quiz directory {}", self.root.display());

        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            MaterializationFailure::ArtifactWriteFailed(format!(
                "cannot create {}: {}",
                self.root.display(),
                e
            ))
        })?;

        Ok(())
    }
}

#[async_trait]
impl ArtifactRepository for FileSystemArtifactRepository {
    async fn write(&self, filename: &str, contents: &str) -> AppResult<()> {
        let path = self.root.join(filename);
        let temp_path = self.root.join(format!(".{}.tmp", Uuid::new_v4()));

        if let Err(e) = tokio::fs::write(&temp_path, contents).await {
            log::error!("Failed to write temp file {}: {}", temp_path.display(), e);
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(MaterializationFailure::ArtifactWriteFailed(format!(
                "{}: {}",
                path.display(),
                e
            ))
            .into());
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            log::error!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            );
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(MaterializationFailure::ArtifactWriteFailed(format!(
                "{}: {}",
                path.display(),
                e
            ))
            .into());
        }

        log::info!("Wrote quiz artifact {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}
