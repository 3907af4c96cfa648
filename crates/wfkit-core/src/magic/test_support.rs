//! Recording test doubles for the magic-action ports.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::action::{ActionError, MagicAction};
use crate::feedback::Item;
use crate::ports::{Feedback, Maintenance, RunLog};

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Action that counts its runs and optionally fails.
#[derive(Debug)]
pub struct CountingAction {
    keyword: String,
    description: String,
    run_text: String,
    failure: Option<String>,
    runs: AtomicUsize,
}

impl CountingAction {
    pub fn new(keyword: &str) -> Arc<Self> {
        Self::build(keyword, None)
    }

    pub fn failing(keyword: &str, reason: &str) -> Arc<Self> {
        Self::build(keyword, Some(reason.to_string()))
    }

    fn build(keyword: &str, failure: Option<String>) -> Arc<Self> {
        Arc::new(Self {
            keyword: keyword.to_string(),
            description: format!("Run {keyword}"),
            run_text: format!("Running {keyword}"),
            failure,
            runs: AtomicUsize::new(0),
        })
    }

    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

impl MagicAction for CountingAction {
    fn keyword(&self) -> &str {
        &self.keyword
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run_text(&self) -> &str {
        &self.run_text
    }

    fn run(&self) -> Result<(), ActionError> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(reason) => Err(ActionError::Other(reason.clone())),
            None => Ok(()),
        }
    }
}

/// Upcast helper so tests can build `Arc<dyn MagicAction>` lists inline.
pub trait AsAction {
    fn as_action(&self) -> Arc<dyn MagicAction>;
}

impl AsAction for Arc<CountingAction> {
    fn as_action(&self) -> Arc<dyn MagicAction> {
        Arc::clone(self) as Arc<dyn MagicAction>
    }
}

/// Feedback double that records every call without filtering anything.
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    pub items: Vec<Item>,
    pub filters: Vec<String>,
    pub warnings: Vec<(String, String)>,
    pub sends: usize,
}

impl RecordingFeedback {
    pub fn is_untouched(&self) -> bool {
        self.items.is_empty()
            && self.filters.is_empty()
            && self.warnings.is_empty()
            && self.sends == 0
    }
}

impl Feedback for RecordingFeedback {
    fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    fn filter(&mut self, query: &str) {
        self.filters.push(query.to_string());
    }

    fn warn_empty(&mut self, title: &str, subtitle: &str) {
        self.warnings.push((title.to_string(), subtitle.to_string()));
    }

    fn send(&mut self) {
        self.sends += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunLogEvent {
    Line(String),
    Finish(bool),
}

/// Run log double that keeps lines and flushes in order.
#[derive(Debug, Default)]
pub struct RecordingRunLog {
    pub events: Vec<RunLogEvent>,
}

impl RunLog for RecordingRunLog {
    fn write_line(&mut self, line: &str) {
        self.events.push(RunLogEvent::Line(line.to_string()));
    }

    fn finish(&mut self, is_failure: bool) {
        self.events.push(RunLogEvent::Finish(is_failure));
    }
}

/// Maintenance double that records operation names and can fail one of them.
#[derive(Debug, Default)]
pub struct RecordingMaintenance {
    calls: Mutex<Vec<&'static str>>,
    fail_on: Option<&'static str>,
}

impl RecordingMaintenance {
    pub fn failing_on(operation: &'static str) -> Self {
        Self {
            calls: Mutex::default(),
            fail_on: Some(operation),
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str) -> Result<(), ActionError> {
        self.calls.lock().unwrap().push(operation);
        if self.fail_on == Some(operation) {
            return Err(ActionError::Other(format!("{operation} failed")));
        }
        Ok(())
    }
}

impl Maintenance for RecordingMaintenance {
    fn open_log(&self) -> Result<(), ActionError> {
        self.record("open_log")
    }

    fn open_data(&self) -> Result<(), ActionError> {
        self.record("open_data")
    }

    fn open_cache(&self) -> Result<(), ActionError> {
        self.record("open_cache")
    }

    fn clear_data(&self) -> Result<(), ActionError> {
        self.record("clear_data")
    }

    fn clear_cache(&self) -> Result<(), ActionError> {
        self.record("clear_cache")
    }
}
