//! Actions command handler.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::bootstrap::CliContext;

/// List the registered magic actions as `<prefix><keyword>  <description>`,
/// sorted by keyword.
pub fn execute(ctx: &CliContext, out: &mut impl Write) -> Result<()> {
    let prefix = ctx.prefix();
    let width = ctx
        .actions
        .keywords()
        .iter()
        .map(|kw| prefix.len() + kw.len())
        .max()
        .unwrap_or_default();

    for action in ctx.actions.iter() {
        let name = format!("{prefix}{}", action.keyword());
        writeln!(out, "{name:<width$}  {}", action.description())?;
    }
    debug!(count = ctx.actions.len(), "Listed magic actions");
    Ok(())
}
