//! Core of wfkit: magic actions, the argument interceptor and the ports
//! they talk to.
//!
//! A host program builds a [`MagicActions`] registry at startup, hands its raw
//! arguments to an [`Interceptor`], and only runs its own logic when the
//! returned [`Interception`] is a pass-through. Everything with side effects
//! (opening files, clearing directories, writing logs, talking to the host UI)
//! lives behind the traits in [`ports`].
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod feedback;
pub mod magic;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use config::{ConfigError, DEFAULT_BUNDLE_ID, DEFAULT_MAGIC_PREFIX, MagicConfig};
pub use feedback::{Icon, Item, ScriptFilterFeedback};
pub use magic::{
    ActionError, FnAction, HelpAction, Interception, Interceptor, MagicAction, MagicActions,
    MaintenanceAction, MaintenanceTask, UpdateAction,
};
pub use ports::{
    Feedback, Maintenance, NoopFeedback, NoopRunLog, Opener, RunLog, UpdateError, Updater,
};

// Re-export path utilities
pub use paths::{
    DirResolution, DirSource, DirectoryCreationStrategy, PathError, ResolvedPaths,
    ensure_directory, log_path, resolve_cache_dir, resolve_data_dir,
};
