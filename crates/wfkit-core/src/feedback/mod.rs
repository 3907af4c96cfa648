//! Result items and the script-filter feedback adapter.
//!
//! [`Item`] is the unit of UI feedback. [`ScriptFilterFeedback`] implements the
//! [`Feedback`](crate::ports::Feedback) port by buffering items, fuzzy-filtering
//! them and writing `{"items": [...]}` JSON to any writer (stdout in the CLI).

mod item;
mod script_filter;

pub use item::{Icon, Item};
pub use script_filter::ScriptFilterFeedback;
