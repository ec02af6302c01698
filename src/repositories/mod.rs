pub mod artifact_repository;
pub mod template_repository;

pub use artifact_repository::{ArtifactRepository, FileSystemArtifactRepository};
pub use template_repository::{FileTemplateRepository, TemplateRepository};
