//! Workflow run log.

/// The workflow's own log: free-form lines plus a completion marker.
pub trait RunLog {
    /// Write one line of text. Fire and forget.
    fn write_line(&mut self, line: &str);

    /// Flush the log and record how the run ended.
    fn finish(&mut self, is_failure: bool);
}

/// A run log that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRunLog;

impl RunLog for NoopRunLog {
    fn write_line(&mut self, _line: &str) {}

    fn finish(&mut self, _is_failure: bool) {}
}
