//! Open and clear the workflow's data and cache directories.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};
use wfkit_core::{
    ActionError, DirectoryCreationStrategy, Maintenance, Opener, ResolvedPaths, ensure_directory,
};

/// [`Maintenance`] over the local filesystem.
///
/// Opening a directory creates it first so the launcher always has
/// something to show. Clearing removes everything inside a directory but
/// keeps the directory itself.
#[derive(Clone)]
pub struct LocalMaintenance {
    paths: ResolvedPaths,
    opener: Arc<dyn Opener>,
}

impl std::fmt::Debug for LocalMaintenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalMaintenance")
            .field("paths", &self.paths)
            .finish_non_exhaustive()
    }
}

impl LocalMaintenance {
    pub fn new(paths: ResolvedPaths, opener: Arc<dyn Opener>) -> Self {
        Self { paths, opener }
    }

    pub const fn paths(&self) -> &ResolvedPaths {
        &self.paths
    }

    fn open_dir(&self, dir: &Path) -> Result<(), ActionError> {
        ensure_directory(dir, DirectoryCreationStrategy::AutoCreate)?;
        self.opener.open(&dir.to_string_lossy())
    }
}

/// Delete every entry inside `dir`. A missing directory counts as already clear.
fn clear_dir(dir: &Path) -> Result<(), ActionError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist, nothing to clear", dir.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut removed = 0usize;
    for entry in entries {
        let path = entry?.path();
        let result = if path.is_dir() && !path.is_symlink() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        result.map_err(|source| ActionError::Clear {
            path: path.clone(),
            source,
        })?;
        removed += 1;
    }

    info!(removed, "Cleared {}", dir.display());
    Ok(())
}

impl Maintenance for LocalMaintenance {
    fn open_log(&self) -> Result<(), ActionError> {
        let log = &self.paths.log_path;
        if let Some(parent) = log.parent() {
            ensure_directory(parent, DirectoryCreationStrategy::AutoCreate)?;
        }
        // Touch the file so there is something to open on a fresh install
        OpenOptions::new().create(true).append(true).open(log)?;
        self.opener.open(&log.to_string_lossy())
    }

    fn open_data(&self) -> Result<(), ActionError> {
        self.open_dir(&self.paths.data_dir)
    }

    fn open_cache(&self) -> Result<(), ActionError> {
        self.open_dir(&self.paths.cache_dir)
    }

    fn clear_data(&self) -> Result<(), ActionError> {
        clear_dir(&self.paths.data_dir)
    }

    fn clear_cache(&self) -> Result<(), ActionError> {
        clear_dir(&self.paths.cache_dir)
    }
}
