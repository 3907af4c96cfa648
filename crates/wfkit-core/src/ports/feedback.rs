//! UI feedback channel.

use crate::feedback::Item;

/// Buffers result items and delivers them to the host UI.
///
/// Nothing reaches the host until [`send`](Feedback::send) is called.
pub trait Feedback {
    /// Append an item to the buffer.
    fn add_item(&mut self, item: Item);

    /// Keep only the buffered items that fuzzy-match `query`, best match first.
    fn filter(&mut self, query: &str);

    /// Add a warning item if the buffer is currently empty.
    fn warn_empty(&mut self, title: &str, subtitle: &str);

    /// Deliver the buffered items to the host UI.
    fn send(&mut self);
}

/// A feedback channel that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedback;

impl Feedback for NoopFeedback {
    fn add_item(&mut self, _item: Item) {}

    fn filter(&mut self, _query: &str) {}

    fn warn_empty(&mut self, _title: &str, _subtitle: &str) {}

    fn send(&mut self) {}
}
