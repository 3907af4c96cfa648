//! OS-level adapters for the wfkit ports.
//!
//! - [`SystemOpener`]: hands paths and URLs to the desktop's default handler
//! - [`LocalMaintenance`]: opens and clears the workflow's directories
//! - [`FileRunLog`]: the workflow's append-only run log
#![deny(unsafe_code)]

mod maintenance;
mod opener;
mod run_log;

pub use maintenance::LocalMaintenance;
pub use opener::SystemOpener;
pub use run_log::{FileRunLog, MAX_LOG_BYTES, MAX_LOG_LINES};
