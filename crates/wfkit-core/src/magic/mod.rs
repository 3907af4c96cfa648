//! Magic actions: keyword-triggered maintenance commands that take over a run.
//!
//! A host program builds a [`MagicActions`] registry (usually
//! [`MagicActions::with_defaults`]), optionally registers its own actions,
//! then passes its arguments through an [`Interceptor`]. If any argument
//! starts with the magic prefix (`workflow:` by default) the interceptor takes
//! over: it either runs the matching action or lists the registered actions,
//! filtered by what the user typed.
//!
//! The built-in actions are:
//!
//! | Keyword    | Action                                                    |
//! |------------|-----------------------------------------------------------|
//! | `log`      | Open the run log in the default app                       |
//! | `data`     | Open the data directory                                   |
//! | `cache`    | Open the cache directory                                  |
//! | `deldata`  | Delete everything in the data directory                   |
//! | `delcache` | Delete everything in the cache directory                  |
//! | `reset`    | Delete everything in both directories                     |
//! | `help`     | Open the help URL (registered by the host when it has one)|
//! | `update`   | Check for and install updates (registered with an updater)|

mod action;
mod builtin;
mod interceptor;
mod registry;

#[cfg(test)]
pub(crate) mod test_support;

pub use action::{ActionError, FnAction, MagicAction};
pub use builtin::{
    HelpAction, MaintenanceAction, MaintenanceTask, UpdateAction, conditional_actions,
    default_actions,
};
pub use interceptor::{Interception, Interceptor};
pub use registry::MagicActions;
