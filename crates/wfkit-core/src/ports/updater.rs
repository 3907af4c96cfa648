//! Self-update subsystem contract.
//!
//! The core never checks for updates on its own. A host that has an updater
//! registers an [`UpdateAction`](crate::UpdateAction) wrapping it.

use thiserror::Error;

/// Errors reported by an [`Updater`].
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Fetching release information failed.
    #[error("Update check failed: {0}")]
    Check(String),

    /// Downloading or installing the new release failed.
    #[error("Update install failed: {0}")]
    Install(String),
}

/// Checks for and installs newer releases of the host program.
#[cfg_attr(test, mockall::automock)]
pub trait Updater: Send + Sync {
    /// Refresh the cached release information.
    fn check_for_update(&self) -> Result<(), UpdateError>;

    /// Whether the last check found a newer release.
    fn update_available(&self) -> bool;

    /// Download and install the newer release.
    fn install(&self) -> Result<(), UpdateError>;
}
