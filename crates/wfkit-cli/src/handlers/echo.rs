//! Echo command handler: a minimal script filter.
//!
//! Shows the query back as a result so the workflow has something to render,
//! and points at the magic prefix so the maintenance actions are discoverable.

use anyhow::Result;
use wfkit_core::{Feedback, Icon, Item};

use crate::bootstrap::CliContext;

pub fn execute(ctx: &CliContext, query: &[String], feedback: &mut dyn Feedback) -> Result<()> {
    let query = query.join(" ");
    let query = query.trim();

    if !query.is_empty() {
        feedback.add_item(
            Item::new(query)
                .with_subtitle("You typed this")
                .with_uid("echo")
                .with_valid(true),
        );
    }

    feedback.add_item(
        Item::new("Workflow actions")
            .with_subtitle(format!("Type {} to see maintenance actions", ctx.prefix()))
            .with_icon(Icon::Info)
            .with_autocomplete(ctx.prefix())
            .with_valid(false),
    );

    feedback.send();
    Ok(())
}
