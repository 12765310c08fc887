//! Resolving config and detection into the concrete commands to run.

use std::path::{Path, PathBuf};

use crate::config::LauncherConfig;
use crate::detection::{package_name, PackageManager, DEFAULT_APP_NAME};
use crate::error::Result;
use crate::shell::CommandSpec;

/// Directory whose presence means dependencies are installed.
pub const DEFAULT_DEPENDENCY_DIR: &str = "node_modules";

/// package.json script that starts the development server.
pub const DEFAULT_START_SCRIPT: &str = "dev";

/// An external tool the launcher probes for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    /// Name shown to the user, e.g. "Node.js".
    pub display_name: String,

    /// Version query used to test that the tool is present.
    pub probe: CommandSpec,
}

impl Tool {
    /// A runtime, probed with `<program> --version`.
    pub fn runtime(program: &str) -> Self {
        let display_name = match program {
            "node" => "Node.js",
            "bun" => "Bun",
            "deno" => "Deno",
            other => other,
        };
        Self {
            display_name: display_name.to_string(),
            probe: CommandSpec::new(program, ["--version"]),
        }
    }

    /// A package manager, probed with its version command.
    pub fn package_manager(pm: PackageManager) -> Self {
        Self {
            display_name: pm.name().to_string(),
            probe: pm.version_command(),
        }
    }
}

/// Everything one launch needs, fully resolved.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    /// Name shown in the startup banner.
    pub app_name: String,

    /// Directory commands run in.
    pub project_root: PathBuf,

    /// Runtime probed first.
    pub runtime: Tool,

    /// Package manager probed second.
    pub package_manager: Tool,

    /// Dependency marker directory.
    pub dependency_dir: PathBuf,

    /// Run only when the dependency directory is absent.
    pub install: CommandSpec,

    /// Always run last; its exit code is forwarded.
    pub start: CommandSpec,
}

impl LaunchPlan {
    /// Resolve a plan for the project at `project_root`.
    ///
    /// Config values win over detection; detection wins over defaults.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPackageManager` if the config names one the
    /// launcher can't drive.
    pub fn resolve(config: &LauncherConfig, project_root: &Path) -> Result<Self> {
        let pm = match &config.package_manager {
            Some(name) => name.parse::<PackageManager>()?,
            None => PackageManager::detect(project_root),
        };

        let runtime = config
            .runtime
            .as_deref()
            .unwrap_or_else(|| pm.default_runtime());

        let app_name = config
            .app_name
            .clone()
            .or_else(|| package_name(project_root))
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        let dependency_dir = project_root.join(
            config
                .dependency_dir
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_DEPENDENCY_DIR)),
        );

        let start_script = config
            .start_script
            .as_deref()
            .unwrap_or(DEFAULT_START_SCRIPT);

        let plan = Self {
            app_name,
            project_root: project_root.to_path_buf(),
            runtime: Tool::runtime(runtime),
            package_manager: Tool::package_manager(pm),
            dependency_dir,
            install: pm.install_command(),
            start: pm.run_script_command(start_script),
        };
        tracing::debug!("Resolved launch plan: {:?}", plan);
        Ok(plan)
    }
}
