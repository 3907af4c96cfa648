//! Script-filter JSON feedback.

use std::io::{self, Write};

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Serialize;
use tracing::{debug, warn};

use super::item::{Icon, Item};
use crate::ports::Feedback;

#[derive(Serialize)]
struct Envelope<'a> {
    items: &'a [Item],
}

/// [`Feedback`] implementation that writes `{"items": [...]}` to a writer.
///
/// Items are only written once; later calls to `send` are ignored so that a
/// program cannot emit two JSON documents on one run.
#[derive(Debug)]
pub struct ScriptFilterFeedback<W: Write> {
    writer: W,
    items: Vec<Item>,
    sent: bool,
}

impl ScriptFilterFeedback<io::Stdout> {
    /// Feedback written to the process's stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ScriptFilterFeedback<W> {
    /// Create a feedback buffer that writes to `writer` on send.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            items: Vec::new(),
            sent: false,
        }
    }

    /// The currently buffered items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Whether the items have been written.
    pub const fn is_sent(&self) -> bool {
        self.sent
    }

    /// Consume the feedback and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_items(&mut self) -> Result<(), io::Error> {
        serde_json::to_writer(
            &mut self.writer,
            &Envelope {
                items: &self.items,
            },
        )?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl<W: Write> Feedback for ScriptFilterFeedback<W> {
    fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    fn filter(&mut self, query: &str) {
        // Whitespace in the query is not significant
        let pattern: String = query.split_whitespace().collect();
        if pattern.is_empty() {
            return;
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        let mut scored: Vec<(i64, Item)> = self
            .items
            .drain(..)
            .filter_map(|item| {
                matcher
                    .fuzzy_match(item.filter_text(), &pattern)
                    .map(|score| (score, item))
            })
            .collect();
        // Stable, so equal scores keep insertion order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        debug!(query, kept = scored.len(), "Filtered feedback items");
        self.items = scored.into_iter().map(|(_, item)| item).collect();
    }

    fn warn_empty(&mut self, title: &str, subtitle: &str) {
        if self.items.is_empty() {
            self.items.push(
                Item::new(title)
                    .with_subtitle(subtitle)
                    .with_icon(Icon::Warning)
                    .with_valid(false),
            );
        }
    }

    fn send(&mut self) {
        if self.sent {
            debug!("Feedback already sent, ignoring");
            return;
        }
        self.sent = true;

        if let Err(e) = self.write_items() {
            warn!("Failed to send feedback: {e}");
        }
    }
}
