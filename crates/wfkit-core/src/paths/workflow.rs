//! Data directory, cache directory and log file resolution.
//!
//! Resolution order for both directories:
//! 1. Explicit override from [`MagicConfig`] (already merged from the environment)
//! 2. Platform default: `<system data|cache dir>/<bundle_id>`
//!
//! Nothing is created on disk here; callers use
//! [`ensure_directory`](super::ensure_directory) when they need the directory.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::{cache_base, data_base, normalize_user_path};
use crate::config::MagicConfig;

/// How a workflow directory was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirSource {
    /// The host or environment supplied the path.
    Override,
    /// Platform default under the system data/cache directory.
    Default,
}

/// Resolution result for a workflow directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirResolution {
    /// The resolved directory.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: DirSource,
}

fn resolve(
    explicit: Option<&str>,
    bundle_id: &str,
    base: fn() -> Result<PathBuf, PathError>,
) -> Result<DirResolution, PathError> {
    if let Some(raw) = explicit {
        return Ok(DirResolution {
            path: normalize_user_path(raw)?,
            source: DirSource::Override,
        });
    }

    Ok(DirResolution {
        path: base()?.join(bundle_id),
        source: DirSource::Default,
    })
}

/// Resolve the directory holding the workflow's saved data.
pub fn resolve_data_dir(config: &MagicConfig) -> Result<DirResolution, PathError> {
    resolve(config.data_dir.as_deref(), &config.bundle_id, data_base)
}

/// Resolve the directory holding the workflow's cached data.
pub fn resolve_cache_dir(config: &MagicConfig) -> Result<DirResolution, PathError> {
    resolve(config.cache_dir.as_deref(), &config.bundle_id, cache_base)
}

/// Location of the workflow's run log: `<cache_dir>/<bundle_id>.log`.
pub fn log_path(config: &MagicConfig) -> Result<PathBuf, PathError> {
    let cache = resolve_cache_dir(config)?;
    Ok(cache.path.join(format!("{}.log", config.bundle_id)))
}
