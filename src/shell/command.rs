//! External command execution.
//!
//! Commands are spawned directly from a program and argument vector,
//! never through a shell, and each call blocks until the child exits.

use crate::error::{LaunchError, Result};
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program to run, looked up on PATH.
    pub program: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a command spec from a program and arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Signal that terminated the child, if any.
    pub signal: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a result that exited with the given code.
    pub fn exited(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            signal: None,
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
            success: code == 0,
        }
    }

    /// Create a result for a child terminated by a signal.
    pub fn signaled(signal: i32) -> Self {
        Self {
            exit_code: None,
            signal: Some(signal),
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
            success: false,
        }
    }

    /// Attach captured stdout.
    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: status.code(),
            signal: exit_signal(&status),
            stdout,
            stderr,
            duration,
            success: status.success(),
        }
    }

    /// Human-readable description of how the command ended.
    pub fn describe(&self) -> String {
        match (self.exit_code, self.signal) {
            (Some(code), _) => format!("exited with code {}", code),
            (None, Some(sig)) => format!("terminated by signal {}", sig),
            (None, None) => "terminated abnormally".to_string(),
        }
    }

    /// Exit code folded into the conventional 0..=255 range.
    ///
    /// A child killed by signal N maps to 128 + N, as POSIX shells report
    /// it. Codes outside the range keep their low 8 bits.
    pub fn normalized_code(&self) -> u8 {
        match (self.exit_code, self.signal) {
            (Some(code), _) => (code & 0xff) as u8,
            (None, Some(sig)) => ((128 + sig) & 0xff) as u8,
            (None, None) => 1,
        }
    }
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout and stderr (if false, both are inherited).
    pub capture_output: bool,
}

impl CommandOptions {
    /// Options for a probe: output captured, nothing shown to the user.
    pub fn captured() -> Self {
        Self {
            capture_output: true,
            ..Default::default()
        }
    }

    /// Options for a user-visible command: stdio inherited.
    pub fn inherited() -> Self {
        Self::default()
    }

    /// Set the working directory.
    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// Runs external commands.
///
/// This trait allows substituting a scripted runner in tests.
pub trait CommandRunner {
    /// Run a command to completion.
    ///
    /// Returns `Err` only when the command could not be started; a
    /// non-zero exit is reported through [`CommandResult`].
    fn run(&mut self, spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
        execute(spec, options)
    }
}

/// Execute a command, blocking until it exits.
pub fn execute(spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    tracing::debug!("Running `{}`", spec);

    let launch_error = |source: std::io::Error| LaunchError::CommandLaunch {
        command: spec.to_string(),
        source,
    };

    let result = if options.capture_output {
        let output = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(launch_error)?;
        CommandResult::from_status(
            output.status,
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
            start.elapsed(),
        )
    } else {
        let status = cmd
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(launch_error)?;
        CommandResult::from_status(status, String::new(), String::new(), start.elapsed())
    };

    tracing::debug!(
        "`{}` {} after {:?}",
        spec,
        result.describe(),
        result.duration
    );

    Ok(result)
}
