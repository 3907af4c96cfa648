//! The magic action contract.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::paths::PathError;
use crate::ports::UpdateError;

/// Errors an action can report from [`MagicAction::run`].
///
/// These never abort the program; the interceptor logs them to the run log.
#[derive(Debug, Error)]
pub enum ActionError {
    /// A workflow directory could not be resolved or created.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Removing an entry while clearing a directory failed.
    #[error("Failed to delete {path}: {source}")]
    Clear {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The launcher could not be started or reported failure.
    #[error("Failed to open with {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The updater reported a failure.
    #[error(transparent)]
    Update(#[from] UpdateError),

    /// Any other I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Failure reported by a host-defined action.
    #[error("{0}")]
    Other(String),
}

/// A command run in place of the host program when its keyword is entered.
///
/// Implementations must be cheap to query: `keyword`, `description` and
/// `run_text` are read for every listing.
pub trait MagicAction: Send + Sync {
    /// What the user types after the prefix to run the action.
    fn keyword(&self) -> &str;

    /// Shown when listing actions.
    fn description(&self) -> &str;

    /// Shown in the UI and written to the run log when the action runs.
    fn run_text(&self) -> &str;

    /// Perform the action.
    fn run(&self) -> Result<(), ActionError>;
}

type RunFn = dyn Fn() -> Result<(), ActionError> + Send + Sync;

/// A [`MagicAction`] backed by a closure, for host-specific commands.
pub struct FnAction {
    keyword: String,
    description: String,
    run_text: String,
    run: Box<RunFn>,
}

impl FnAction {
    /// Create an action that calls `run` when triggered.
    pub fn new<F>(
        keyword: impl Into<String>,
        description: impl Into<String>,
        run_text: impl Into<String>,
        run: F,
    ) -> Self
    where
        F: Fn() -> Result<(), ActionError> + Send + Sync + 'static,
    {
        Self {
            keyword: keyword.into(),
            description: description.into(),
            run_text: run_text.into(),
            run: Box::new(run),
        }
    }
}

impl fmt::Debug for FnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAction")
            .field("keyword", &self.keyword)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl MagicAction for FnAction {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run_text(&self) -> &str {
        &self.run_text
    }

    fn run(&self) -> Result<(), ActionError> {
        (self.run)()
    }
}
