//! Runtime configuration for the magic-action dispatcher.
//!
//! Configuration is read from environment variables only. The interceptor
//! runs before any argument parsing, so there is no flag layer to merge in.
//!
//! Variables understood (first match wins where two are listed):
//!
//! | Setting    | Variables                                       | Default     |
//! |------------|-------------------------------------------------|-------------|
//! | prefix     | `WFKIT_MAGIC_PREFIX`                            | `workflow:` |
//! | bundle id  | `alfred_workflow_bundleid`, `WFKIT_BUNDLE_ID`   | `wfkit`     |
//! | data dir   | `alfred_workflow_data`, `WFKIT_DATA_DIR`        | platform    |
//! | cache dir  | `alfred_workflow_cache`, `WFKIT_CACHE_DIR`      | platform    |
//! | help URL   | `WFKIT_HELP_URL`                                | none        |

use thiserror::Error;

/// Default prefix that marks an argument as a magic keyword.
pub const DEFAULT_MAGIC_PREFIX: &str = "workflow:";

/// Bundle identifier used when the host does not provide one.
pub const DEFAULT_BUNDLE_ID: &str = "wfkit";

/// Errors raised by [`MagicConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The magic prefix is empty, so every argument would be treated as magic.
    #[error("Magic prefix cannot be empty")]
    EmptyPrefix,

    /// Arguments are trimmed before matching, so a prefix starting with
    /// whitespace can never match.
    #[error("Magic prefix {0:?} starts with whitespace")]
    PrefixLeadingWhitespace(String),

    /// The bundle identifier is used as a directory name and must be usable as one.
    #[error("Invalid bundle id {0:?}")]
    InvalidBundleId(String),

    /// A help URL was configured but is blank.
    #[error("Help URL cannot be blank")]
    EmptyHelpUrl,
}

/// Settings shared by the interceptor, path resolution and the built-in actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicConfig {
    /// Prefix that flags an argument as a magic keyword.
    pub prefix: String,
    /// Identifier naming the data/cache subdirectories and the log file.
    pub bundle_id: String,
    /// URL opened by the `help` action; the action is only registered when set.
    pub help_url: Option<String>,
    /// Explicit data directory override.
    pub data_dir: Option<String>,
    /// Explicit cache directory override.
    pub cache_dir: Option<String>,
}

impl Default for MagicConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_MAGIC_PREFIX.to_string(),
            bundle_id: DEFAULT_BUNDLE_ID.to_string(),
            help_url: None,
            data_dir: None,
            cache_dir: None,
        }
    }
}

impl MagicConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| lookup(key))
                .find(|value| !value.trim().is_empty())
        };

        let defaults = Self::default();
        Self {
            prefix: get(&["WFKIT_MAGIC_PREFIX"]).unwrap_or(defaults.prefix),
            bundle_id: get(&["alfred_workflow_bundleid", "WFKIT_BUNDLE_ID"])
                .unwrap_or(defaults.bundle_id),
            help_url: get(&["WFKIT_HELP_URL"]),
            data_dir: get(&["alfred_workflow_data", "WFKIT_DATA_DIR"]),
            cache_dir: get(&["alfred_workflow_cache", "WFKIT_CACHE_DIR"]),
        }
    }

    /// Replace the magic prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the help URL.
    #[must_use]
    pub fn with_help_url(mut self, url: impl Into<String>) -> Self {
        self.help_url = Some(url.into());
        self
    }

    /// Set explicit data and cache directories.
    #[must_use]
    pub fn with_dirs(mut self, data_dir: impl Into<String>, cache_dir: impl Into<String>) -> Self {
        self.data_dir = Some(data_dir.into());
        self.cache_dir = Some(cache_dir.into());
        self
    }

    /// Check the configuration for values the dispatcher cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if self.prefix.starts_with(char::is_whitespace) {
            return Err(ConfigError::PrefixLeadingWhitespace(self.prefix.clone()));
        }

        let bundle = self.bundle_id.trim();
        if bundle.is_empty()
            || bundle.contains(['/', '\\'])
            || bundle == "."
            || bundle == ".."
        {
            return Err(ConfigError::InvalidBundleId(self.bundle_id.clone()));
        }

        if self.help_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            return Err(ConfigError::EmptyHelpUrl);
        }

        Ok(())
    }
}
