//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<...>`
//! - Thin wrappers that read from the context and format output
//!
//! [`magic`] runs before argument parsing; the rest are subcommands.

pub mod actions;
pub mod echo;
pub mod magic;
pub mod paths;
