//! Error types for launcher operations.
//!
//! This module defines [`LaunchError`], the error type used throughout the
//! launcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Tool probes and the dependency install are checked; their failures are
//!   `ToolMissing` and `InstallFailed`
//! - A user interrupt is `Interrupted` and counts as a clean stop
//! - Everything else is unexpected and surfaces with exit code 1
//! - The start command's exit code is never turned into an error

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A required tool could not be probed.
    #[error("{tool} is not available: {message}")]
    ToolMissing { tool: String, message: String },

    /// The dependency install command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    InstallFailed { command: String, code: Option<i32> },

    /// The user stopped the launcher with Ctrl+C.
    #[error("Interrupted by user")]
    Interrupted,

    /// An external command could not be started at all.
    #[error("Failed to run `{command}`: {source}")]
    CommandLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the launcher config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// A package manager name that the launcher doesn't know.
    #[error("Unknown package manager: {name}")]
    UnknownPackageManager { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LaunchError {
    /// Exit code the launcher reports for this error.
    ///
    /// An interrupt is a clean stop. Every other failure is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => 0,
            _ => 1,
        }
    }

    /// Whether this error means a required tool or the dependency
    /// install is unavailable, as opposed to something unexpected.
    pub fn is_dependency_unavailable(&self) -> bool {
        matches!(self, Self::ToolMissing { .. } | Self::InstallFailed { .. })
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LaunchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_missing_displays_tool_and_message() {
        let err = LaunchError::ToolMissing {
            tool: "node".into(),
            message: "exited with code 127".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("node"));
        assert!(msg.contains("exited with code 127"));
    }

    #[test]
    fn install_failed_displays_command_and_code() {
        let err = LaunchError::InstallFailed {
            command: "npm install".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("npm install"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn command_launch_displays_command() {
        let err = LaunchError::CommandLaunch {
            command: "npm run dev".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("npm run dev"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn config_parse_displays_path_and_message() {
        let err = LaunchError::ConfigParse {
            path: PathBuf::from("/proj/devlaunch.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/proj/devlaunch.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn interrupted_exits_cleanly() {
        assert_eq!(LaunchError::Interrupted.exit_code(), 0);
    }

    #[test]
    fn every_other_error_exits_with_one() {
        let errors = vec![
            LaunchError::ToolMissing {
                tool: "npm".into(),
                message: "not found".into(),
            },
            LaunchError::InstallFailed {
                command: "npm install".into(),
                code: Some(2),
            },
            LaunchError::UnknownPackageManager {
                name: "cargo".into(),
            },
            LaunchError::Other(anyhow::anyhow!("boom")),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn dependency_unavailable_covers_probe_and_install() {
        assert!(LaunchError::ToolMissing {
            tool: "node".into(),
            message: "x".into(),
        }
        .is_dependency_unavailable());
        assert!(LaunchError::InstallFailed {
            command: "npm install".into(),
            code: None,
        }
        .is_dependency_unavailable());
        assert!(!LaunchError::Interrupted.is_dependency_unavailable());
        assert!(!LaunchError::Other(anyhow::anyhow!("x")).is_dependency_unavailable());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: LaunchError = io_err.into();
        assert!(matches!(err, LaunchError::Io(_)));
    }
}
