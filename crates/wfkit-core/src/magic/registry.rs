//! Keyword → action registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::action::MagicAction;
use super::builtin::default_actions;
use crate::ports::Maintenance;

/// The registered magic actions, keyed by [`MagicAction::keyword`].
///
/// Each keyword maps to at most one action. Registering a keyword that is
/// already present replaces the earlier action. The registry is meant to be
/// built once at startup and only read afterwards.
#[derive(Clone, Default)]
pub struct MagicActions {
    actions: HashMap<String, Arc<dyn MagicAction>>,
}

impl MagicActions {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the six built-in maintenance actions.
    pub fn with_defaults(maintenance: Arc<dyn Maintenance>) -> Self {
        let mut registry = Self::new();
        registry.register(default_actions(&maintenance));
        registry
    }

    /// Add actions, replacing any existing action with the same keyword.
    pub fn register<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = Arc<dyn MagicAction>>,
    {
        for action in actions {
            self.register_one(action);
        }
    }

    /// Add a single action, replacing any existing action with the same keyword.
    pub fn register_one(&mut self, action: Arc<dyn MagicAction>) {
        let keyword = action.keyword().to_string();
        if self.actions.insert(keyword.clone(), action).is_some() {
            debug!(keyword = %keyword, "Replaced magic action");
        }
    }

    /// Remove actions by keyword. Keywords that aren't registered are ignored.
    pub fn unregister<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = Arc<dyn MagicAction>>,
    {
        for action in actions {
            self.unregister_keyword(action.keyword());
        }
    }

    /// Remove the action registered under `keyword`, if any.
    pub fn unregister_keyword(&mut self, keyword: &str) {
        self.actions.remove(keyword);
    }

    /// Look up an action by exact keyword.
    pub fn get(&self, keyword: &str) -> Option<&Arc<dyn MagicAction>> {
        self.actions.get(keyword)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.actions.contains_key(keyword)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Registered keywords, sorted.
    pub fn keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        keywords.sort_unstable();
        keywords
    }

    /// Registered actions, sorted by keyword.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn MagicAction>> {
        let mut actions: Vec<&Arc<dyn MagicAction>> = self.actions.values().collect();
        actions.sort_by(|a, b| a.keyword().cmp(b.keyword()));
        actions.into_iter()
    }
}

impl fmt::Debug for MagicActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MagicActions")
            .field("keywords", &self.keywords())
            .finish()
    }
}
