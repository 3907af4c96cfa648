//! Command-line host for wfkit.
//!
//! The binary intercepts magic arguments before clap sees anything, then
//! falls through to ordinary subcommands.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by main.rs
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
