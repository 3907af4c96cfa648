//! CLI entry point - the composition root.
//!
//! Raw arguments go through the magic interceptor first. Only when no magic
//! argument is present does clap parse them and dispatch to a handler.

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use wfkit_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use wfkit_core::ScriptFilterFeedback;

fn main() -> ExitCode {
    // stdout is reserved for script filter JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // Load .env file if present
    dotenvy::dotenv().ok();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let ctx = bootstrap(CliConfig::from_env())?;

    // args_os: a non-UTF-8 argument must not abort the run
    let mut argv = std::env::args_os();
    let program = argv.next().unwrap_or_else(|| OsString::from("wfkit"));
    let args: Vec<OsString> = argv.collect();

    let interception = handlers::magic::execute(&ctx, &args);
    if let Some(code) = interception.exit_code() {
        debug!(?interception, "Magic argument handled");
        return Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)));
    }

    let cli = Cli::parse_from(std::iter::once(program).chain(args));

    match cli.command {
        Some(Commands::Paths) => handlers::paths::execute(&ctx, &mut io::stdout().lock())?,
        Some(Commands::Actions) => handlers::actions::execute(&ctx, &mut io::stdout().lock())?,
        Some(Commands::Echo { query }) => {
            let mut feedback = ScriptFilterFeedback::stdout();
            handlers::echo::execute(&ctx, &query, &mut feedback)?;
        }
        None => Cli::command().print_help()?,
    }

    Ok(ExitCode::SUCCESS)
}
