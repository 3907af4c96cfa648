//! Paths command handler.
//!
//! Displays all resolved workflow paths for diagnostics and debugging.

use std::io::Write;

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the paths command.
///
/// Prints every path the magic actions operate on in `key = value` format,
/// including where each directory came from.
pub fn execute(ctx: &CliContext, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", ctx.paths)?;
    Ok(())
}
