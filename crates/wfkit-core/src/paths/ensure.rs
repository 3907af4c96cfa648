//! Directory creation utilities.

use std::fs;
use std::path::Path;

use super::error::PathError;

/// Strategy for how to handle missing directories when ensuring they exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryCreationStrategy {
    /// Create directories automatically if they are missing.
    #[default]
    AutoCreate,
    /// Do not create directories; return an error if missing.
    Disallow,
}

/// Ensure the provided directory exists according to the chosen strategy.
///
/// If the path exists it must be a directory. If it doesn't exist, behavior
/// depends on `strategy`:
/// - `AutoCreate`: Creates the directory (and parents)
/// - `Disallow`: Returns an error
pub fn ensure_directory(path: &Path, strategy: DirectoryCreationStrategy) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    match strategy {
        DirectoryCreationStrategy::AutoCreate => {
            fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
        DirectoryCreationStrategy::Disallow => {
            Err(PathError::DirectoryNotFound(path.to_path_buf()))
        }
    }
}
