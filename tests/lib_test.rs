//! Library integration tests.

use devlaunch::config::{LauncherConfig, PACKAGE_MANAGER_ENV};
use devlaunch::launcher::{LaunchPlan, Launcher};
use devlaunch::shell::{
    CommandOptions, CommandResult, CommandRunner, CommandSpec, InterruptFlag,
};
use devlaunch::ui::MockUI;
use devlaunch::LaunchError;
use std::fs;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = LaunchError::InstallFailed {
        command: "npm install".into(),
        code: Some(1),
    };
    assert!(err.to_string().contains("npm install"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> devlaunch::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn env_var_names_are_public() {
    assert_eq!(PACKAGE_MANAGER_ENV, "DEVLAUNCH_PACKAGE_MANAGER");
}

/// A runner that succeeds at everything and remembers what it ran.
#[derive(Default)]
struct RecordingRunner {
    calls: Vec<CommandSpec>,
}

impl CommandRunner for RecordingRunner {
    fn run(
        &mut self,
        spec: &CommandSpec,
        _options: &CommandOptions,
    ) -> devlaunch::Result<CommandResult> {
        self.calls.push(spec.clone());
        Ok(CommandResult::exited(0))
    }
}

#[test]
fn custom_runner_drives_the_launcher() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("yarn.lock"), "").unwrap();
    let plan = LaunchPlan::resolve(&LauncherConfig::default(), temp.path()).unwrap();
    let install = plan.install.clone();
    let start = plan.start.clone();

    let mut launcher = Launcher::new(RecordingRunner::default(), plan, InterruptFlag::new());
    let mut ui = MockUI::new();
    let code = launcher.launch(&mut ui);

    assert_eq!(code, 0);
    let calls = launcher.into_runner().calls;
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[2], install);
    assert_eq!(calls[3], start);
    assert_eq!(start.args, vec!["run", "dev"]);
}
