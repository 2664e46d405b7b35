//! Command execution result type.

use crate::error::ShellError;

/// Exit status of a command: 0 is success, anything else failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExitStatus(pub u8);

impl ExitStatus {
    pub const SUCCESS: Self = Self(0);
    pub const FAILURE: Self = Self(1);

    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    pub fn code(self) -> i32 {
        i32::from(self.0)
    }
}

/// Request for the hosting page to navigate away from the terminal.
///
/// The host decides whether to act on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    pub url: String,
}

/// Result of executing a command.
///
/// Output has already been written to the renderer; this carries the exit
/// status and, optionally, a navigation intent (e.g., for `cd`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_status: ExitStatus,
    pub navigate_to: Option<NavigationIntent>,
}

impl CommandResult {
    /// Successful result with no navigation.
    pub fn success() -> Self {
        Self::status(ExitStatus::SUCCESS)
    }

    /// Failed result with no navigation.
    pub fn failure() -> Self {
        Self::status(ExitStatus::FAILURE)
    }

    pub fn status(exit_status: ExitStatus) -> Self {
        Self {
            exit_status,
            navigate_to: None,
        }
    }

    /// Successful result asking the host to open `url`.
    pub fn navigate(url: impl Into<String>) -> Self {
        Self {
            exit_status: ExitStatus::SUCCESS,
            navigate_to: Some(NavigationIntent { url: url.into() }),
        }
    }
}

impl From<&ShellError> for CommandResult {
    fn from(err: &ShellError) -> Self {
        Self::status(err.exit_status())
    }
}
