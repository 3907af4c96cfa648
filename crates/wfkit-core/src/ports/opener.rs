//! Handing files, directories and URLs to the desktop.

use crate::magic::ActionError;

/// Opens a path or URL with the platform's default application.
#[cfg_attr(test, mockall::automock)]
pub trait Opener: Send + Sync {
    /// Open `target`, returning once the launcher has exited.
    fn open(&self, target: &str) -> Result<(), ActionError>;
}
