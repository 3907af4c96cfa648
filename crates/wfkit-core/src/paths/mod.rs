//! Path resolution for a workflow's data directory, cache directory and log file.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Overrides come from [`MagicConfig`](crate::MagicConfig); nothing here reads the environment
//! - OS-specific fallbacks are kept private in `platform`

mod ensure;
mod error;
mod platform;
mod resolver;
mod workflow;

// Error type
pub use error::PathError;

// Directory operations
pub use ensure::{DirectoryCreationStrategy, ensure_directory};

// Workflow directories
pub use workflow::{DirResolution, DirSource, log_path, resolve_cache_dir, resolve_data_dir};

// Pure resolver for testing and CLI
pub use resolver::ResolvedPaths;
