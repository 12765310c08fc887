//! Configuration file discovery and loading.
//!
//! The launcher reads at most one config file from the project root,
//! then applies environment variable overrides on top of it.

use crate::config::schema::LauncherConfig;
use crate::error::{LaunchError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &["devlaunch.yml", ".devlaunch.yml"];

/// Overrides the configured or detected package manager.
pub const PACKAGE_MANAGER_ENV: &str = "DEVLAUNCH_PACKAGE_MANAGER";

/// Overrides the configured or default runtime.
pub const RUNTIME_ENV: &str = "DEVLAUNCH_RUNTIME";

/// Find the config file in the project root, if there is one.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `Io` if the file can't be read.
/// Returns `ConfigParse` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LauncherConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into LauncherConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LauncherConfig> {
    // An empty file deserializes as unit, not as an empty mapping.
    if content.trim().is_empty() {
        return Ok(LauncherConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| LaunchError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Apply environment variable overrides to a config.
///
/// Takes the lookup as a function so tests don't touch the process
/// environment. Empty values are ignored.
pub fn apply_env_overrides<F>(mut config: LauncherConfig, env_fn: F) -> LauncherConfig
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| env_fn(key).filter(|v| !v.trim().is_empty());

    if let Some(pm) = non_empty(PACKAGE_MANAGER_ENV) {
        tracing::debug!("{} overrides package manager: {}", PACKAGE_MANAGER_ENV, pm);
        config.package_manager = Some(pm);
    }
    if let Some(runtime) = non_empty(RUNTIME_ENV) {
        tracing::debug!("{} overrides runtime: {}", RUNTIME_ENV, runtime);
        config.runtime = Some(runtime);
    }
    config
}

/// Load the project config and apply overrides from the process environment.
///
/// A missing config file is not an error; defaults are used.
pub fn load_config(project_root: &Path) -> Result<LauncherConfig> {
    load_config_with_env(project_root, |key| std::env::var(key).ok())
}

/// Load the project config with a custom env var lookup function.
pub fn load_config_with_env<F>(project_root: &Path, env_fn: F) -> Result<LauncherConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match find_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => LauncherConfig::default(),
    };
    Ok(apply_env_overrides(config, env_fn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config_with_env(temp.path(), no_env).unwrap();
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn finds_plain_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("devlaunch.yml"), "runtime: bun").unwrap();

        let config = load_config_with_env(temp.path(), no_env).unwrap();
        assert_eq!(config.runtime.as_deref(), Some("bun"));
    }

    #[test]
    fn finds_hidden_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".devlaunch.yml"), "app_name: Hidden").unwrap();

        let config = load_config_with_env(temp.path(), no_env).unwrap();
        assert_eq!(config.app_name.as_deref(), Some("Hidden"));
    }

    #[test]
    fn plain_config_wins_over_hidden() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("devlaunch.yml"), "app_name: Plain").unwrap();
        fs::write(temp.path().join(".devlaunch.yml"), "app_name: Hidden").unwrap();

        assert_eq!(find_config(temp.path()), Some(temp.path().join("devlaunch.yml")));
    }

    #[test]
    fn empty_config_file_is_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("devlaunch.yml"), "\n").unwrap();

        let config = load_config_with_env(temp.path(), no_env).unwrap();
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn parse_config_returns_parse_error_for_invalid_yaml() {
        let result = parse_config("invalid: yaml: content: [", Path::new("devlaunch.yml"));
        assert!(matches!(result, Err(LaunchError::ConfigParse { .. })));
    }

    #[test]
    fn env_overrides_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("devlaunch.yml"),
            "package_manager: yarn\nruntime: node",
        )
        .unwrap();
        let env: HashMap<&str, &str> = [(PACKAGE_MANAGER_ENV, "pnpm")].into_iter().collect();

        let config =
            load_config_with_env(temp.path(), |k| env.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.package_manager.as_deref(), Some("pnpm"));
        assert_eq!(config.runtime.as_deref(), Some("node"));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let config = LauncherConfig {
            runtime: Some("node".to_string()),
            ..Default::default()
        };
        let config = apply_env_overrides(config, |_| Some("  ".to_string()));
        assert_eq!(config.runtime.as_deref(), Some("node"));
        assert_eq!(config.package_manager, None);
    }
}
