//! Filesystem maintenance operations on the workflow's own files.

use crate::magic::ActionError;

/// Open and clear operations behind the built-in magic actions.
///
/// Implementations decide what "open" means on the platform (usually
/// handing the path to the desktop's default application).
pub trait Maintenance: Send + Sync {
    /// Open the run log file.
    fn open_log(&self) -> Result<(), ActionError>;

    /// Open the data directory.
    fn open_data(&self) -> Result<(), ActionError>;

    /// Open the cache directory.
    fn open_cache(&self) -> Result<(), ActionError>;

    /// Delete everything inside the data directory.
    fn clear_data(&self) -> Result<(), ActionError>;

    /// Delete everything inside the cache directory.
    fn clear_cache(&self) -> Result<(), ActionError>;

    /// Clear both cache and data directories.
    ///
    /// Both are attempted; the first failure is returned.
    fn reset(&self) -> Result<(), ActionError> {
        let cache = self.clear_cache();
        let data = self.clear_data();
        cache.and(data)
    }
}
