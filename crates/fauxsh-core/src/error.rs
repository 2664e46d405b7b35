//! Error types for the shell core.
//!
//! - [`ShellError`] - failures reported by command handlers and the interpreter
//! - [`ManifestError`] - failures building the virtual filesystem from a manifest
//! - [`ProbeError`] - failures of the network probe behind `ping`
//!
//! The `Display` output of a [`ShellError`] is exactly the line printed to the
//! terminal.

use thiserror::Error;

use crate::commands::ExitStatus;

/// Errors surfaced by commands.
///
/// Every variant is printed by the handler that produced it and converted to
/// an exit status; none of them ever reaches the host as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// Path operand does not resolve to an entry.
    #[error("{command}: {operand}: No such file or directory")]
    NotFound {
        command: &'static str,
        operand: String,
    },
    /// `ls` target does not resolve.
    #[error("ls: cannot access '{0}': No such file or directory")]
    CannotAccess(String),
    /// `cd` target does not resolve.
    #[error("cd: The directory {0} does not exist")]
    DirectoryNotFound(String),
    /// A directory was required but a file or executable was found.
    #[error("{command}: {operand} is not a directory")]
    NotADirectory {
        command: &'static str,
        operand: String,
    },
    /// A file was required but a directory was found.
    #[error("{command}: {operand}: Is a directory")]
    IsADirectory {
        command: &'static str,
        operand: String,
    },
    /// Payload kind the handler cannot render.
    #[error("File type not supported!")]
    UnsupportedType,
    /// Network probe failed.
    #[error("ping: {0}: Address not reachable")]
    Unreachable(String),
    /// Neither the registry nor `PATH` knows the command.
    #[error("{0}: command not found")]
    CommandNotFound(String),
    /// `which` found nothing on `PATH`.
    #[error("which: {0}: command not found")]
    WhichNotFound(String),
    /// Required operand was omitted.
    #[error("{0}: missing operand")]
    MissingOperand(&'static str),
    /// `ping` called without an address.
    #[error("ping: usage error: Destination address required")]
    MissingDestination,
}

impl ShellError {
    /// Exit status reported for this error.
    ///
    /// `UnsupportedType` is reported as success.
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Self::UnsupportedType => ExitStatus::SUCCESS,
            _ => ExitStatus::FAILURE,
        }
    }
}

/// Errors raised while turning a manifest into a [`VirtualFs`](crate::VirtualFs).
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("manifest root must be a directory")]
    RootNotDirectory,
    #[error("invalid entry name '{0}'")]
    InvalidName(String),
    #[error("'{path}' is bound to unknown command '{command}'")]
    UnknownCommand { path: String, command: String },
    #[error("'{path}' holds invalid base64 data: {source}")]
    Binary {
        path: String,
        #[source]
        source: base64::DecodeError,
    },
}

/// Network probe failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ShellError::IsADirectory {
            command: "cat",
            operand: "a".to_string(),
        };
        assert_eq!(err.to_string(), "cat: a: Is a directory");
        assert_eq!(
            ShellError::DirectoryNotFound("/nope".to_string()).to_string(),
            "cd: The directory /nope does not exist"
        );
        assert_eq!(
            ShellError::CommandNotFound("foo".to_string()).to_string(),
            "foo: command not found"
        );
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(ShellError::UnsupportedType.exit_status(), ExitStatus::SUCCESS);
        assert_eq!(
            ShellError::Unreachable("x".to_string()).exit_status(),
            ExitStatus::FAILURE
        );
        assert_eq!(
            ShellError::MissingOperand("cat").exit_status(),
            ExitStatus::FAILURE
        );
    }
}
