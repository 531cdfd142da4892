use std::path::Path;

use communicator_application::{ApplicationError, PictogramSource};
use communicator_domain::{accept_all, is_pictogram_file, CatalogBuilder, PictogramCatalog};
use tracing::warn;
use walkdir::WalkDir;

#[derive(Clone, Copy)]
pub struct WalkdirPictogramScanner {
    filter: fn(&Path) -> bool,
}

impl Default for WalkdirPictogramScanner {
    fn default() -> Self {
        Self::new(accept_all)
    }
}

impl WalkdirPictogramScanner {
    pub fn new(filter: fn(&Path) -> bool) -> Self {
        Self { filter }
    }

    pub fn images_only() -> Self {
        Self::new(is_pictogram_file)
    }
}

impl PictogramSource for WalkdirPictogramScanner {
    fn load_catalog(&self, root: &Path) -> Result<PictogramCatalog, ApplicationError> {
        if !root.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "pictogram root does not exist or is not a directory: {}",
                root.display()
            )));
        }

        let mut builder = CatalogBuilder::new(root);
        let walker = WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!(%error, "skipping unreadable pictogram entry");
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().to_string();
            if entry.file_type().is_dir() {
                builder.push_category(entry.depth(), name, entry.path().to_path_buf());
            } else if (self.filter)(entry.path()) {
                builder.push_leaf(entry.depth(), name, entry.path().to_path_buf());
            }
        }

        Ok(builder.finish())
    }
}
