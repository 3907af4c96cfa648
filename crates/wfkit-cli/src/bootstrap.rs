//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the adapters are wired together:
//! - Configuration (environment, already merged with `.env` by `main`)
//! - Path resolution (via wfkit-core)
//! - Opener and maintenance adapters (via wfkit-runtime)
//! - The magic action registry, including the conditional actions

use std::sync::Arc;

use tracing::debug;
use wfkit_core::magic::conditional_actions;
use wfkit_core::{MagicActions, MagicConfig, Maintenance, Opener, ResolvedPaths, Updater};
use wfkit_runtime::{LocalMaintenance, SystemOpener};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Clone)]
pub struct CliConfig {
    /// Prefix, directories and help URL.
    pub magic: MagicConfig,
    /// Launcher used by the open actions and `help`.
    pub opener: Arc<dyn Opener>,
    /// Registers the `update` action when present.
    pub updater: Option<Arc<dyn Updater>>,
}

impl CliConfig {
    /// Config from the process environment with the platform opener.
    pub fn from_env() -> Self {
        Self::new(MagicConfig::from_env())
    }

    pub fn new(magic: MagicConfig) -> Self {
        Self {
            magic,
            opener: Arc::new(SystemOpener::new()),
            updater: None,
        }
    }

    /// Use a different launcher.
    #[must_use]
    pub fn with_opener(mut self, opener: Arc<dyn Opener>) -> Self {
        self.opener = opener;
        self
    }

    /// Enable the `update` action.
    #[must_use]
    pub fn with_updater(mut self, updater: Arc<dyn Updater>) -> Self {
        self.updater = Some(updater);
        self
    }
}

/// Fully composed context for command handlers.
pub struct CliContext {
    /// Validated configuration.
    pub config: MagicConfig,
    /// Resolved workflow paths.
    pub paths: ResolvedPaths,
    /// The magic action registry, read-only from here on.
    pub actions: MagicActions,
}

impl CliContext {
    /// The magic prefix in effect.
    pub fn prefix(&self) -> &str {
        &self.config.prefix
    }
}

/// Bootstrap the CLI application.
///
/// 1. Validates the configuration
/// 2. Resolves the workflow paths
/// 3. Builds the maintenance adapter over those paths
/// 4. Registers the default actions plus `help`/`update` when configured
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    config.magic.validate()?;

    let paths = ResolvedPaths::resolve(&config.magic)?;
    debug!("Resolved paths:\n{paths}");

    let maintenance: Arc<dyn Maintenance> = Arc::new(LocalMaintenance::new(
        paths.clone(),
        Arc::clone(&config.opener),
    ));

    let mut actions = MagicActions::with_defaults(maintenance);
    actions.register(conditional_actions(
        config.magic.help_url.as_deref(),
        &config.opener,
        config.updater,
    ));
    debug!(count = actions.len(), "Registered magic actions");

    Ok(CliContext {
        config: config.magic,
        paths,
        actions,
    })
}
