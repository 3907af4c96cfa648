//! Built-in magic actions.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use super::action::{ActionError, MagicAction};
use crate::ports::{Maintenance, Opener, Updater};

/// The six maintenance operations every registry gets by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaintenanceTask {
    OpenLog,
    OpenCache,
    ClearCache,
    OpenData,
    ClearData,
    Reset,
}

impl MaintenanceTask {
    /// All tasks, in registration order.
    pub const ALL: [Self; 6] = [
        Self::OpenLog,
        Self::OpenCache,
        Self::ClearCache,
        Self::OpenData,
        Self::ClearData,
        Self::Reset,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::OpenLog => "log",
            Self::OpenCache => "cache",
            Self::ClearCache => "delcache",
            Self::OpenData => "data",
            Self::ClearData => "deldata",
            Self::Reset => "reset",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::OpenLog => "Open workflow's log file",
            Self::OpenCache => "Open workflow's cache directory",
            Self::ClearCache => "Delete workflow's cached data",
            Self::OpenData => "Open workflow's data directory",
            Self::ClearData => "Delete workflow's saved data",
            Self::Reset => "Delete all saved and cached workflow data",
        }
    }

    pub const fn run_text(self) -> &'static str {
        match self {
            Self::OpenLog => "Opening log file…",
            Self::OpenCache => "Opening cache directory…",
            Self::ClearCache => "Deleted workflow's cached data",
            Self::OpenData => "Opening data directory…",
            Self::ClearData => "Deleted workflow's saved data",
            Self::Reset => "Deleted workflow saved and cached data",
        }
    }

    fn run_on(self, maintenance: &dyn Maintenance) -> Result<(), ActionError> {
        match self {
            Self::OpenLog => maintenance.open_log(),
            Self::OpenCache => maintenance.open_cache(),
            Self::ClearCache => maintenance.clear_cache(),
            Self::OpenData => maintenance.open_data(),
            Self::ClearData => maintenance.clear_data(),
            Self::Reset => maintenance.reset(),
        }
    }
}

/// A [`MaintenanceTask`] bound to the [`Maintenance`] port that performs it.
#[derive(Clone)]
pub struct MaintenanceAction {
    task: MaintenanceTask,
    maintenance: Arc<dyn Maintenance>,
}

impl MaintenanceAction {
    pub fn new(task: MaintenanceTask, maintenance: Arc<dyn Maintenance>) -> Self {
        Self { task, maintenance }
    }

    pub const fn task(&self) -> MaintenanceTask {
        self.task
    }
}

impl fmt::Debug for MaintenanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaintenanceAction")
            .field("task", &self.task)
            .finish_non_exhaustive()
    }
}

impl MagicAction for MaintenanceAction {
    fn keyword(&self) -> &str {
        self.task.keyword()
    }

    fn description(&self) -> &str {
        self.task.description()
    }

    fn run_text(&self) -> &str {
        self.task.run_text()
    }

    fn run(&self) -> Result<(), ActionError> {
        self.task.run_on(self.maintenance.as_ref())
    }
}

/// Opens the workflow's help URL.
#[derive(Clone)]
pub struct HelpAction {
    url: String,
    opener: Arc<dyn Opener>,
}

impl HelpAction {
    pub fn new(url: impl Into<String>, opener: Arc<dyn Opener>) -> Self {
        Self {
            url: url.into(),
            opener,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for HelpAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelpAction")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl MagicAction for HelpAction {
    fn keyword(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "Open workflow help URL in default browser"
    }

    fn run_text(&self) -> &str {
        "Opening help in your browser…"
    }

    fn run(&self) -> Result<(), ActionError> {
        self.opener.open(&self.url)
    }
}

/// Checks for an update and installs it if one is available.
#[derive(Clone)]
pub struct UpdateAction {
    updater: Arc<dyn Updater>,
}

impl UpdateAction {
    pub fn new(updater: Arc<dyn Updater>) -> Self {
        Self { updater }
    }
}

impl fmt::Debug for UpdateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateAction").finish_non_exhaustive()
    }
}

impl MagicAction for UpdateAction {
    fn keyword(&self) -> &str {
        "update"
    }

    fn description(&self) -> &str {
        "Check for updates, and install if one is available"
    }

    fn run_text(&self) -> &str {
        "Fetching update…"
    }

    fn run(&self) -> Result<(), ActionError> {
        self.updater.check_for_update()?;
        if self.updater.update_available() {
            self.updater.install()?;
        } else {
            info!("No update available");
        }
        Ok(())
    }
}

/// The six maintenance actions, bound to `maintenance`.
pub fn default_actions(maintenance: &Arc<dyn Maintenance>) -> Vec<Arc<dyn MagicAction>> {
    MaintenanceTask::ALL
        .into_iter()
        .map(|task| {
            Arc::new(MaintenanceAction::new(task, Arc::clone(maintenance))) as Arc<dyn MagicAction>
        })
        .collect()
}

/// The `help` and `update` actions, each only when its collaborator is configured.
pub fn conditional_actions(
    help_url: Option<&str>,
    opener: &Arc<dyn Opener>,
    updater: Option<Arc<dyn Updater>>,
) -> Vec<Arc<dyn MagicAction>> {
    let mut actions: Vec<Arc<dyn MagicAction>> = Vec::new();
    if let Some(url) = help_url {
        actions.push(Arc::new(HelpAction::new(url, Arc::clone(opener))));
    }
    if let Some(updater) = updater {
        actions.push(Arc::new(UpdateAction::new(updater)));
    }
    actions
}
