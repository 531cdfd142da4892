use std::fs;
use std::path::Path;

use communicator_application::{ApplicationError, BoardRepository};

#[derive(Debug, Default)]
pub struct JsonBoardFile;

impl BoardRepository for JsonBoardFile {
    fn read_file(&self, path: &Path) -> Result<String, ApplicationError> {
        fs::read_to_string(path).map_err(|error| ApplicationError::io(path, error))
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), ApplicationError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|error| ApplicationError::io(parent, error))?;
            }
        }
        fs::write(path, contents).map_err(|error| ApplicationError::io(path, error))
    }
}
