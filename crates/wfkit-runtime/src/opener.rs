//! Launch the desktop's default application for a path or URL.

use tracing::debug;
use wfkit_core::{ActionError, Opener};

const DEFAULT_APP: &str = "default application";

/// [`Opener`] backed by the `open` crate.
///
/// Uses the platform's default handler unless a specific program is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemOpener {
    program: Option<String>,
}

impl SystemOpener {
    /// Opener using the platform's default handler for each target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opener that always hands targets to `program`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: Some(program.into()),
        }
    }

    pub fn program(&self) -> Option<&str> {
        self.program.as_deref()
    }
}

impl Opener for SystemOpener {
    fn open(&self, target: &str) -> Result<(), ActionError> {
        debug!(program = self.program(), target, "Opening");

        let result = match &self.program {
            Some(program) => open::with(target, program),
            None => open::that(target),
        };

        result.map_err(|source| ActionError::Launch {
            program: self.program().unwrap_or(DEFAULT_APP).to_string(),
            source,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn successful_launcher_is_ok() {
        SystemOpener::with_program("true").open("/tmp").unwrap();
    }

    #[test]
    fn failing_launcher_is_a_launch_error() {
        let err = SystemOpener::with_program("false").open("/tmp").unwrap_err();
        assert!(matches!(
            err,
            ActionError::Launch { ref program, .. } if program == "false"
        ));
    }

    #[test]
    fn missing_launcher_reports_launch_error() {
        let err = SystemOpener::with_program("wfkit-no-such-launcher")
            .open("/tmp")
            .unwrap_err();
        assert!(matches!(err, ActionError::Launch { .. }));
    }

    #[test]
    fn default_opener_has_no_fixed_program() {
        assert_eq!(SystemOpener::new().program(), None);
        assert_eq!(SystemOpener::with_program("xdg-open").program(), Some("xdg-open"));
    }
}
