//! The launch sequence.
//!
//! A launch runs four steps in strict order and never goes back:
//!
//! 1. Probe the runtime (`node --version`)
//! 2. Probe the package manager (`npm --version`)
//! 3. Install dependencies if the dependency directory is missing
//! 4. Run the development server and forward its exit code
//!
//! Steps 1-3 are checked; any failure stops the launch with exit code 1.
//! Step 4 is never checked, so a server that exits non-zero on shutdown
//! is reported with its own code rather than as a launcher error.
//!
//! # Example
//!
//! ```no_run
//! use devlaunch::launcher::launch;
//! use devlaunch::shell::{InterruptFlag, SystemRunner};
//! use devlaunch::ui::TerminalUI;
//!
//! let root = std::env::current_dir().unwrap();
//! let mut ui = TerminalUI::new();
//! let code = launch(&root, SystemRunner, InterruptFlag::new(), &mut ui);
//! std::process::exit(code as i32);
//! ```

pub mod plan;

pub use plan::{LaunchPlan, Tool, DEFAULT_DEPENDENCY_DIR, DEFAULT_START_SCRIPT};

use std::path::Path;

use crate::config::load_config;
use crate::error::{LaunchError, Result};
use crate::shell::{CommandOptions, CommandResult, CommandRunner, CommandSpec, InterruptFlag};
use crate::ui::UserInterface;

/// Runs one launch plan.
pub struct Launcher<R: CommandRunner> {
    runner: R,
    plan: LaunchPlan,
    interrupt: InterruptFlag,
}

impl<R: CommandRunner> Launcher<R> {
    /// Create a launcher for a resolved plan.
    pub fn new(runner: R, plan: LaunchPlan, interrupt: InterruptFlag) -> Self {
        Self {
            runner,
            plan,
            interrupt,
        }
    }

    /// The plan this launcher runs.
    pub fn plan(&self) -> &LaunchPlan {
        &self.plan
    }

    /// Consume the launcher and return its runner.
    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Run the launch sequence and return the launcher's exit code.
    ///
    /// Errors are reported through `ui` and mapped to their exit code.
    pub fn launch(&mut self, ui: &mut dyn UserInterface) -> u8 {
        match self.run(ui) {
            Ok(code) => code,
            Err(e) => {
                report_error(ui, &e, Some(&self.plan));
                e.exit_code() as u8
            }
        }
    }

    /// Run the launch sequence.
    ///
    /// Returns the start command's exit code, folded into 0..=255.
    ///
    /// # Errors
    ///
    /// Returns `ToolMissing` if a probe fails, `InstallFailed` if the
    /// install exits non-zero, `Interrupted` if Ctrl+C arrived during any
    /// step, or `CommandLaunch` if the start command can't be spawned.
    pub fn run(&mut self, ui: &mut dyn UserInterface) -> Result<u8> {
        ui.show_header(&self.plan.app_name);

        let runtime = self.plan.runtime.clone();
        self.probe(&runtime, ui)?;

        let package_manager = self.plan.package_manager.clone();
        self.probe(&package_manager, ui)?;

        self.ensure_dependencies(ui)?;

        ui.step("🚀", "Starting application...");
        ui.show_rule();

        let start = self.plan.start.clone();
        let options = CommandOptions::inherited().in_dir(&self.plan.project_root);
        let result = self.run_step(&start, &options)?;

        tracing::info!("`{}` {}", start, result.describe());
        Ok(result.normalized_code())
    }

    /// Check that a tool is present by running its version query.
    fn probe(&mut self, tool: &Tool, ui: &mut dyn UserInterface) -> Result<()> {
        let options = CommandOptions::captured().in_dir(&self.plan.project_root);
        let result = match self.run_step(&tool.probe, &options) {
            Ok(result) => result,
            Err(LaunchError::CommandLaunch { source, .. }) => {
                return Err(LaunchError::ToolMissing {
                    tool: tool.display_name.clone(),
                    message: format!("`{}` could not be run: {}", tool.probe, source),
                });
            }
            Err(e) => return Err(e),
        };

        if !result.success {
            return Err(LaunchError::ToolMissing {
                tool: tool.display_name.clone(),
                message: format!("`{}` {}", tool.probe, result.describe()),
            });
        }

        tracing::debug!(
            "{} version: {}",
            tool.display_name,
            result.stdout.trim()
        );
        ui.success(&format!("{} detected", tool.display_name));
        Ok(())
    }

    /// Install dependencies once, if the dependency directory is absent.
    fn ensure_dependencies(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        if self.plan.dependency_dir.exists() {
            tracing::debug!(
                "{} exists, skipping install",
                self.plan.dependency_dir.display()
            );
            return Ok(());
        }

        ui.step("📦", "Installing dependencies...");

        let install = self.plan.install.clone();
        let options = CommandOptions::inherited().in_dir(&self.plan.project_root);
        let result = self.run_step(&install, &options)?;

        if !result.success {
            return Err(LaunchError::InstallFailed {
                command: install.to_string(),
                code: result.exit_code,
            });
        }

        ui.success("Dependencies installed");
        Ok(())
    }

    /// Run one command, stopping if Ctrl+C arrived before or during it.
    fn run_step(&mut self, spec: &CommandSpec, options: &CommandOptions) -> Result<CommandResult> {
        self.check_interrupt()?;
        let outcome = self.runner.run(spec, options);
        self.check_interrupt()?;
        outcome
    }

    fn check_interrupt(&self) -> Result<()> {
        if self.interrupt.is_raised() {
            return Err(LaunchError::Interrupted);
        }
        Ok(())
    }
}

/// Report a launch error to the user.
///
/// `plan` is used to name the tools in the install hint; it is absent
/// when the error happened before a plan could be resolved.
pub fn report_error(ui: &mut dyn UserInterface, err: &LaunchError, plan: Option<&LaunchPlan>) {
    tracing::debug!("Launch stopped: {:?}", err);

    match err {
        LaunchError::Interrupted => {
            ui.step("👋", "Application stopped by user.");
        }
        e if e.is_dependency_unavailable() => {
            ui.error(&format!("Error: {}", e));
            let (runtime, pm) = plan
                .map(|p| {
                    (
                        p.runtime.display_name.as_str(),
                        p.package_manager.display_name.as_str(),
                    )
                })
                .unwrap_or(("the runtime", "its package manager"));
            ui.hint(&format!(
                "Please ensure {} and {} are installed on your system.",
                runtime, pm
            ));
        }
        e => {
            ui.error(&format!("Unexpected error: {}", e));
        }
    }
}

/// Load config, resolve a plan, and run it for the project at `project_root`.
///
/// This is the whole launcher: it never fails, it returns the exit code.
pub fn launch<R: CommandRunner>(
    project_root: &Path,
    runner: R,
    interrupt: InterruptFlag,
    ui: &mut dyn UserInterface,
) -> u8 {
    let plan = match load_config(project_root).and_then(|c| LaunchPlan::resolve(&c, project_root))
    {
        Ok(plan) => plan,
        Err(e) => {
            report_error(ui, &e, None);
            return e.exit_code() as u8;
        }
    };

    Launcher::new(runner, plan, interrupt).launch(ui)
}
