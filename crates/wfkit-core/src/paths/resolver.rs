//! Pure path resolver for testing and CLI introspection.

use std::path::PathBuf;

use super::{DirSource, PathError, log_path, resolve_cache_dir, resolve_data_dir};
use crate::config::MagicConfig;

/// All workflow paths captured in a single struct.
///
/// Used by the `wfkit paths` command and by the runtime adapters, so that
/// everything acting on the workflow's directories agrees on where they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory for saved data.
    pub data_dir: PathBuf,
    /// How the data directory was resolved.
    pub data_source: DirSource,
    /// Directory for cached data.
    pub cache_dir: PathBuf,
    /// How the cache directory was resolved.
    pub cache_source: DirSource,
    /// The run log file.
    pub log_path: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths for the given configuration.
    pub fn resolve(config: &MagicConfig) -> Result<Self, PathError> {
        let data = resolve_data_dir(config)?;
        let cache = resolve_cache_dir(config)?;
        let log_path = log_path(config)?;

        Ok(Self {
            data_dir: data.path,
            data_source: data.source,
            cache_dir: cache.path,
            cache_source: cache.source,
            log_path,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_dir = {}", self.data_dir.display())?;
        writeln!(f, "data_source = {:?}", self.data_source)?;
        writeln!(f, "cache_dir = {}", self.cache_dir.display())?;
        writeln!(f, "cache_source = {:?}", self.cache_source)?;
        write!(f, "log_path = {}", self.log_path.display())
    }
}
