//! CLI-specific error types and exit code mapping.
//!
//! Magic actions never produce these: their failures go to the run log and
//! the process still exits 0. These cover the host's own setup.

use thiserror::Error;
use wfkit_core::{ConfigError, PathError};

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid configuration from the environment.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Workflow directories could not be resolved.
    #[error("Path error: {0}")]
    Path(#[from] PathError),
}

impl CliError {
    /// Map error to a sysexits-style exit code.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78, // EX_CONFIG
            Self::Path(_) => 73,   // EX_CANTCREAT
        }
    }
}
