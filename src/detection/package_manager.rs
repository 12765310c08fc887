//! Package manager detection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::LaunchError;
use crate::shell::CommandSpec;

/// A JavaScript package manager the launcher can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Lockfiles checked in order; the first one present wins.
    const LOCKFILES: &'static [(&'static str, PackageManager)] = &[
        ("yarn.lock", PackageManager::Yarn),
        ("pnpm-lock.yaml", PackageManager::Pnpm),
        ("bun.lockb", PackageManager::Bun),
        ("bun.lock", PackageManager::Bun),
        ("package-lock.json", PackageManager::Npm),
    ];

    /// Detect the package manager for a project from its lockfile.
    ///
    /// Falls back to npm when no lockfile is present.
    pub fn detect(project_root: &Path) -> Self {
        for (lockfile, manager) in Self::LOCKFILES {
            if project_root.join(lockfile).is_file() {
                tracing::debug!("Found {}, using {}", lockfile, manager);
                return *manager;
            }
        }
        Self::Npm
    }

    /// Name as written in config and shown to the user.
    pub fn name(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// Executable to invoke.
    ///
    /// npm, yarn and pnpm are installed as `.cmd` shims on Windows.
    pub fn program(self) -> String {
        if cfg!(target_os = "windows") && self != Self::Bun {
            format!("{}.cmd", self.name())
        } else {
            self.name().to_string()
        }
    }

    /// Runtime this package manager is normally paired with.
    pub fn default_runtime(self) -> &'static str {
        match self {
            Self::Bun => "bun",
            _ => "node",
        }
    }

    /// Version query used to probe for the tool.
    pub fn version_command(self) -> CommandSpec {
        CommandSpec::new(self.program(), ["--version"])
    }

    /// Dependency install command.
    pub fn install_command(self) -> CommandSpec {
        CommandSpec::new(self.program(), ["install"])
    }

    /// Command that runs a package.json script.
    pub fn run_script_command(self, script: &str) -> CommandSpec {
        CommandSpec::new(self.program(), ["run", script])
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PackageManager {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            "bun" => Ok(Self::Bun),
            _ => Err(LaunchError::UnknownPackageManager {
                name: s.to_string(),
            }),
        }
    }
}
