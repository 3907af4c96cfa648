//! Subcommands run when no magic argument took over.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved data, cache and log paths
    Paths,

    /// List the registered magic actions
    Actions,

    /// Emit script-filter feedback echoing the query
    Echo {
        /// Query words, joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
}
