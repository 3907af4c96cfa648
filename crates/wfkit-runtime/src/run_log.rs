//! The workflow's run log file.
//!
//! Format: one line per entry, prefixed with local wall-clock time, and a
//! separator line when the run finishes:
//!
//! ```text
//! 14:03:07.412 Opening log file…
//! ---------------- 12.31ms ----------------
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Local;
use tracing::{error, info, warn};
use wfkit_core::RunLog;

/// Size above which the log is cut down when opened.
pub const MAX_LOG_BYTES: u64 = 5 * 1024 * 1024;

/// Number of trailing lines kept when the log is cut down.
pub const MAX_LOG_LINES: usize = 1000;

/// [`RunLog`] appending to a file, mirrored to `tracing`.
#[derive(Debug)]
pub struct FileRunLog {
    path: PathBuf,
    file: File,
    started: Instant,
}

impl FileRunLog {
    /// Open (creating if needed) the log at `path` and start the run clock.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        truncate_log(&path, MAX_LOG_BYTES, MAX_LOG_LINES)?;

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file,
            started: Instant::now(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&mut self, text: &str) {
        if let Err(e) = writeln!(self.file, "{text}") {
            warn!("Failed to write run log {}: {e}", self.path.display());
        }
    }
}

/// Keep only the last `max_lines` lines if the file is larger than `max_bytes`.
///
/// Written to a temp file then renamed over the log.
fn truncate_log(path: &Path, max_bytes: u64, max_lines: usize) -> io::Result<()> {
    let size = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    if size <= max_bytes {
        return Ok(());
    }

    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let lines: Vec<&str> = content.lines().collect();
    let kept = &lines[lines.len().saturating_sub(max_lines)..];

    let temp_path = path.with_extension("log.tmp");
    let mut output = kept.join("\n");
    output.push('\n');
    fs::write(&temp_path, output)?;
    fs::rename(&temp_path, path)?;

    info!(
        "Truncated run log {} to {} lines",
        path.display(),
        kept.len()
    );
    Ok(())
}

impl RunLog for FileRunLog {
    fn write_line(&mut self, line: &str) {
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        self.append(&format!("{timestamp} {line}"));
        info!(target: "wfkit::run_log", "{line}");
    }

    fn finish(&mut self, is_failure: bool) {
        let elapsed = self.started.elapsed();
        let marker = if is_failure {
            format!("---------------- {elapsed:.2?} [ERROR] ----------------")
        } else {
            format!("---------------- {elapsed:.2?} ----------------")
        };
        self.append(&marker);

        if let Err(e) = self.file.flush() {
            warn!("Failed to flush run log {}: {e}", self.path.display());
        }

        if is_failure {
            error!(?elapsed, "Run finished with errors");
        } else {
            info!(?elapsed, "Run finished");
        }
    }
}
