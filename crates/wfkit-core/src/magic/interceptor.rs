//! Argument interception.
//!
//! The interceptor looks at a program's arguments once, before the program
//! parses them. Only the first argument (after trimming) that starts with the
//! magic prefix is considered; every other argument is left alone.

use tracing::{debug, info, warn};

use super::action::MagicAction;
use super::registry::MagicActions;
use crate::feedback::{Icon, Item};
use crate::ports::{Feedback, RunLog};

/// Exit status for every run the interceptor takes over, including failed actions.
const MAGIC_EXIT_CODE: i32 = 0;

const NO_MATCH_TITLE: &str = "No matching action";
const NO_MATCH_SUBTITLE: &str = "Try another query?";

/// What the interceptor did with the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interception {
    /// No magic argument: the host should carry on with these (unchanged) arguments.
    PassThrough(Vec<String>),
    /// The keyword matched and the action ran. The host should exit.
    Ran { keyword: String, failed: bool },
    /// The keyword didn't match; the filtered action list was sent. The host should exit.
    Listed { query: String },
}

impl Interception {
    /// Exit status the host should terminate with, or `None` to keep running.
    ///
    /// A failed action still exits with 0; the failure is only recorded in the
    /// run log and in [`Interception::Ran::failed`].
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::PassThrough(_) => None,
            Self::Ran { .. } | Self::Listed { .. } => Some(MAGIC_EXIT_CODE),
        }
    }

    pub const fn is_terminal(&self) -> bool {
        self.exit_code().is_some()
    }

    /// The arguments to continue with, if the run was not taken over.
    pub fn into_args(self) -> Option<Vec<String>> {
        match self {
            Self::PassThrough(args) => Some(args),
            Self::Ran { .. } | Self::Listed { .. } => None,
        }
    }
}

/// Scans arguments for a magic keyword and dispatches it against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Interceptor<'a> {
    actions: &'a MagicActions,
    prefix: &'a str,
}

impl<'a> Interceptor<'a> {
    pub const fn new(actions: &'a MagicActions, prefix: &'a str) -> Self {
        Self { actions, prefix }
    }

    pub const fn prefix(&self) -> &str {
        self.prefix
    }

    /// The keyword query carried by the first magic argument, if there is one.
    pub fn magic_query<'b>(&self, args: &'b [String]) -> Option<&'b str> {
        args.iter()
            .map(|arg| arg.trim())
            .find_map(|arg| arg.strip_prefix(self.prefix))
    }

    /// Run a magic action or list the available ones, or hand `args` back.
    ///
    /// Nothing is written to `feedback` or `run_log` unless an argument
    /// carries the prefix.
    pub fn intercept(
        &self,
        args: Vec<String>,
        feedback: &mut dyn Feedback,
        run_log: &mut dyn RunLog,
    ) -> Interception {
        let Some(query) = self.magic_query(&args).map(str::to_owned) else {
            return Interception::PassThrough(args);
        };
        debug!(query = %query, "Found magic argument");

        match self.actions.get(&query) {
            Some(action) => Self::run_action(action.as_ref(), feedback, run_log),
            None => self.list_actions(query, feedback),
        }
    }

    fn run_action(
        action: &dyn MagicAction,
        feedback: &mut dyn Feedback,
        run_log: &mut dyn RunLog,
    ) -> Interception {
        let run_text = action.run_text();
        run_log.write_line(run_text);
        feedback.add_item(Item::new(run_text).with_icon(Icon::Info).with_valid(false));
        feedback.send();

        let failed = match action.run() {
            Ok(()) => false,
            Err(e) => {
                warn!(keyword = action.keyword(), "Magic action failed: {e}");
                run_log.write_line(&format!(
                    "Error running magic arg `{}`: {e}",
                    action.description()
                ));
                run_log.finish(true);
                true
            }
        };
        run_log.finish(false);

        info!(keyword = action.keyword(), failed, "Ran magic action");
        Interception::Ran {
            keyword: action.keyword().to_string(),
            failed,
        }
    }

    fn list_actions(&self, query: String, feedback: &mut dyn Feedback) -> Interception {
        for action in self.actions.iter() {
            let keyword = action.keyword();
            let description = action.description();
            feedback.add_item(
                Item::new(keyword)
                    .with_subtitle(description)
                    .with_valid(false)
                    .with_icon(Icon::Info)
                    .with_uid(description)
                    .with_autocomplete(format!("{}{keyword}", self.prefix))
                    .with_match(format!("{keyword} {description}")),
            );
        }

        feedback.filter(&query);
        feedback.warn_empty(NO_MATCH_TITLE, NO_MATCH_SUBTITLE);
        feedback.send();

        debug!(query = %query, "Listed magic actions");
        Interception::Listed { query }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::ScriptFilterFeedback;
    use crate::magic::test_support::{
        CountingAction, RecordingFeedback, RecordingRunLog, RunLogEvent, args,
    };

    const PREFIX: &str = "workflow:";

    fn registry(actions: &[&std::sync::Arc<CountingAction>]) -> MagicActions {
        let mut registry = MagicActions::new();
        for action in actions {
            registry.register_one((*action).clone());
        }
        registry
    }

    #[test]
    fn arguments_without_prefix_pass_through_untouched() {
        let log = CountingAction::new("log");
        let registry = registry(&[&log]);
        let mut feedback = RecordingFeedback::default();
        let mut run_log = RecordingRunLog::default();

        let input = args(&["  foo ", "bar workflow:log", "--verbose"]);
        let result = Interceptor::new(&registry, PREFIX).intercept(
            input.clone(),
            &mut feedback,
            &mut run_log,
        );

        assert_eq!(result, Interception::PassThrough(input));
        assert_eq!(result.exit_code(), None);
        assert!(feedback.is_untouched());
        assert!(run_log.events.is_empty());
        assert_eq!(log.runs(), 0);
    }

    #[test]
    fn prefix_with_trailing_space_matches_inside_trimmed_argument() {
        let log = CountingAction::new("log");
        let registry = registry(&[&log]);

        let result = Interceptor::new(&registry, "wf: ").intercept(
            args(&["  wf: log  "]),
            &mut RecordingFeedback::default(),
            &mut RecordingRunLog::default(),
        );

        assert!(matches!(result, Interception::Ran { ref keyword, .. } if keyword == "log"));
        assert_eq!(log.runs(), 1);
    }

    #[test]
    fn exact_keyword_runs_only_that_action() {
        let log = CountingAction::new("log");
        let data = CountingAction::new("data");
        let registry = registry(&[&log, &data]);
        let mut feedback = RecordingFeedback::default();
        let mut run_log = RecordingRunLog::default();

        let result = Interceptor::new(&registry, PREFIX).intercept(
            args(&["foo", "workflow:data"]),
            &mut feedback,
            &mut run_log,
        );

        assert_eq!(
            result,
            Interception::Ran {
                keyword: "data".to_string(),
                failed: false
            }
        );
        assert_eq!(result.exit_code(), Some(0));
        assert_eq!(data.runs(), 1);
        assert_eq!(log.runs(), 0);

        // One informational, non-actionable item, and no listing
        assert_eq!(feedback.items.len(), 1);
        assert_eq!(feedback.items[0].title(), "Running data");
        assert_eq!(feedback.items[0].icon(), Some(&Icon::Info));
        assert!(!feedback.items[0].is_valid());
        assert_eq!(feedback.sends, 1);
        assert!(feedback.filters.is_empty());
        assert!(feedback.warnings.is_empty());

        assert_eq!(
            run_log.events,
            vec![
                RunLogEvent::Line("Running data".to_string()),
                RunLogEvent::Finish(false),
            ]
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let log = CountingAction::new("log");
        let registry = registry(&[&log]);

        let result = Interceptor::new(&registry, PREFIX).intercept(
            args(&["  workflow:log\t"]),
            &mut RecordingFeedback::default(),
            &mut RecordingRunLog::default(),
        );

        assert!(matches!(result, Interception::Ran { .. }));
        assert_eq!(log.runs(), 1);
    }

    #[test]
    fn only_first_magic_argument_is_honoured() {
        let log = CountingAction::new("log");
        let data = CountingAction::new("data");
        let registry = registry(&[&log, &data]);

        Interceptor::new(&registry, PREFIX).intercept(
            args(&["workflow:data", "workflow:log"]),
            &mut RecordingFeedback::default(),
            &mut RecordingRunLog::default(),
        );

        assert_eq!(data.runs(), 1);
        assert_eq!(log.runs(), 0);
    }

    #[test]
    fn unknown_keyword_lists_every_action_and_filters() {
        let log = CountingAction::new("log");
        let data = CountingAction::new("data");
        let registry = registry(&[&log, &data]);
        let mut feedback = RecordingFeedback::default();
        let mut run_log = RecordingRunLog::default();

        let result = Interceptor::new(&registry, PREFIX).intercept(
            args(&["workflow:xyz"]),
            &mut feedback,
            &mut run_log,
        );

        assert_eq!(
            result,
            Interception::Listed {
                query: "xyz".to_string()
            }
        );
        assert_eq!(result.exit_code(), Some(0));
        assert_eq!(log.runs(), 0);
        assert_eq!(data.runs(), 0);

        let titles: Vec<&str> = feedback.items.iter().map(Item::title).collect();
        assert_eq!(titles, vec!["data", "log"]);
        assert_eq!(feedback.filters, vec!["xyz".to_string()]);
        assert_eq!(
            feedback.warnings,
            vec![(NO_MATCH_TITLE.to_string(), NO_MATCH_SUBTITLE.to_string())]
        );
        assert_eq!(feedback.sends, 1);
        assert!(run_log.events.is_empty());
    }

    #[test]
    fn listed_items_carry_completion_and_match_text() {
        let log = CountingAction::new("log");
        let registry = registry(&[&log]);
        let mut feedback = RecordingFeedback::default();

        Interceptor::new(&registry, PREFIX).intercept(
            args(&["workflow:"]),
            &mut feedback,
            &mut RecordingRunLog::default(),
        );

        let item = &feedback.items[0];
        assert_eq!(item.subtitle(), Some("Run log"));
        assert_eq!(item.uid(), Some("Run log"));
        assert_eq!(item.autocomplete(), Some("workflow:log"));
        assert_eq!(item.match_text(), Some("log Run log"));
        assert!(!item.is_valid());
        assert_eq!(feedback.filters, vec![String::new()]);
    }

    #[test]
    fn keyword_match_is_case_sensitive() {
        let log = CountingAction::new("log");
        let registry = registry(&[&log]);

        let result = Interceptor::new(&registry, PREFIX).intercept(
            args(&["workflow:LOG"]),
            &mut RecordingFeedback::default(),
            &mut RecordingRunLog::default(),
        );

        assert!(matches!(result, Interception::Listed { .. }));
        assert_eq!(log.runs(), 0);
    }

    #[test]
    fn failed_action_logs_error_then_still_exits_zero() {
        let broken = CountingAction::failing("deldata", "permission denied");
        let registry = registry(&[&broken]);
        let mut run_log = RecordingRunLog::default();

        let result = Interceptor::new(&registry, PREFIX).intercept(
            args(&["workflow:deldata"]),
            &mut RecordingFeedback::default(),
            &mut run_log,
        );

        assert_eq!(
            result,
            Interception::Ran {
                keyword: "deldata".to_string(),
                failed: true
            }
        );
        assert_eq!(result.exit_code(), Some(0));
        assert_eq!(broken.runs(), 1);
        assert_eq!(
            run_log.events,
            vec![
                RunLogEvent::Line("Running deldata".to_string()),
                RunLogEvent::Line(
                    "Error running magic arg `Run deldata`: permission denied".to_string()
                ),
                RunLogEvent::Finish(true),
                RunLogEvent::Finish(false),
            ]
        );
    }

    #[test]
    fn custom_prefix_is_respected() {
        let log = CountingAction::new("log");
        let registry = registry(&[&log]);
        let interceptor = Interceptor::new(&registry, "magic/");

        let passed = interceptor.intercept(
            args(&["workflow:log"]),
            &mut RecordingFeedback::default(),
            &mut RecordingRunLog::default(),
        );
        assert!(matches!(passed, Interception::PassThrough(_)));

        let ran = interceptor.intercept(
            args(&["magic/log"]),
            &mut RecordingFeedback::default(),
            &mut RecordingRunLog::default(),
        );
        assert!(ran.is_terminal());
        assert_eq!(log.runs(), 1);
    }

    #[test]
    fn unmatched_query_shows_warning_in_script_filter_output() {
        let log = CountingAction::new("log");
        let data = CountingAction::new("data");
        let registry = registry(&[&log, &data]);
        let mut feedback = ScriptFilterFeedback::new(Vec::new());

        Interceptor::new(&registry, PREFIX).intercept(
            args(&["workflow:xyz"]),
            &mut feedback,
            &mut RecordingRunLog::default(),
        );

        let json: serde_json::Value = serde_json::from_slice(&feedback.into_inner()).unwrap();
        let items = json["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], NO_MATCH_TITLE);
    }

    #[test]
    fn into_args_only_for_pass_through() {
        assert_eq!(
            Interception::PassThrough(args(&["a"])).into_args(),
            Some(args(&["a"]))
        );
        assert_eq!(
            Interception::Listed {
                query: String::new()
            }
            .into_args(),
            None
        );
    }
}
