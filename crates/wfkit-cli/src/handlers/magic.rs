//! Magic argument interception for the CLI.

use std::ffi::OsString;

use tracing::{debug, warn};
use wfkit_core::{Feedback, Interception, Interceptor, NoopRunLog, RunLog, ScriptFilterFeedback};
use wfkit_runtime::FileRunLog;

use crate::bootstrap::CliContext;

/// Intercept raw process arguments, writing feedback to stdout.
///
/// On pass-through the caller keeps using its own `args`, so arguments that
/// are not valid UTF-8 reach the parser unchanged.
pub fn execute(ctx: &CliContext, args: &[OsString]) -> Interception {
    let mut feedback = ScriptFilterFeedback::stdout();
    intercept_with(ctx, utf8_args(args), &mut feedback)
}

/// The arguments that are valid UTF-8. The rest can never carry a keyword.
pub fn utf8_args(args: &[OsString]) -> Vec<String> {
    args.iter()
        .filter_map(|arg| match arg.to_str() {
            Some(arg) => Some(arg.to_owned()),
            None => {
                debug!(arg = ?arg, "Skipping non-UTF-8 argument");
                None
            }
        })
        .collect()
}

/// Intercept `args` with the given feedback channel.
///
/// The run log is only opened once a magic argument is found, so ordinary
/// runs never create or touch the log file.
pub fn intercept_with(
    ctx: &CliContext,
    args: Vec<String>,
    feedback: &mut dyn Feedback,
) -> Interception {
    let interceptor = Interceptor::new(&ctx.actions, ctx.prefix());
    if interceptor.magic_query(&args).is_none() {
        return Interception::PassThrough(args);
    }

    let mut run_log: Box<dyn RunLog> = match FileRunLog::open(ctx.paths.log_path.clone()) {
        Ok(log) => Box::new(log),
        Err(e) => {
            warn!("Cannot open run log {}: {e}", ctx.paths.log_path.display());
            Box::new(NoopRunLog)
        }
    };

    interceptor.intercept(args, feedback, run_log.as_mut())
}
