//! Port definitions (trait abstractions) for the dispatcher's collaborators.
//!
//! Ports define the interfaces the core expects from infrastructure. They
//! contain no implementation details; adapters live in `wfkit-runtime`
//! (filesystem, processes, log file) and in [`crate::feedback`] (script
//! filter output).
//!
//! # Design Rules
//!
//! - Synchronous: the interceptor runs once near process start
//! - No process or filesystem implementation details in signatures
//! - Failures that belong to an action are reported as [`ActionError`](crate::ActionError)

pub mod feedback;
pub mod maintenance;
pub mod opener;
pub mod run_log;
pub mod updater;

pub use feedback::{Feedback, NoopFeedback};
pub use maintenance::Maintenance;
pub use opener::Opener;
pub use run_log::{NoopRunLog, RunLog};
pub use updater::{UpdateError, Updater};

#[cfg(test)]
pub use opener::MockOpener;
#[cfg(test)]
pub use updater::MockUpdater;
