use std::path::{Path, PathBuf};

use communicator_domain::PictogramCatalog;

use crate::ApplicationError;

pub trait BoardRepository {
    fn read_file(&self, path: &Path) -> Result<String, ApplicationError>;

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), ApplicationError>;
}

pub trait PictogramSource {
    fn load_catalog(&self, root: &Path) -> Result<PictogramCatalog, ApplicationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailArtifact {
    pub file_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

pub trait ThumbnailGenerator {
    fn ensure_thumbnail(
        &self,
        source_path: &Path,
        cache_root: &Path,
        size: u32,
    ) -> Result<ThumbnailArtifact, ApplicationError>;
}
