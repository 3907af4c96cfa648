//! Platform-specific directory roots and user path normalization.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Root under which per-workflow data directories are created.
pub(super) fn data_base() -> Result<PathBuf, PathError> {
    dirs::data_local_dir().ok_or(PathError::NoDataDir)
}

/// Root under which per-workflow cache directories are created.
pub(super) fn cache_base() -> Result<PathBuf, PathError> {
    dirs::cache_dir().ok_or(PathError::NoCacheDir)
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(super) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
