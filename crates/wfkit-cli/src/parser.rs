//! Main CLI parser.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the wfkit host.
///
/// Any argument starting with the magic prefix (`workflow:` by default) is
/// handled before this parser runs.
#[derive(Parser)]
#[command(name = "wfkit")]
#[command(about = "Workflow host with built-in maintenance actions")]
#[command(version = wfkit_build_info::LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}
