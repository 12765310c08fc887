//! Configuration schema for `devlaunch.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for devlaunch.yml.
///
/// Every field is optional; an absent field falls back to detection or
/// the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Application name (for the startup banner)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Runtime executable, e.g. `node`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,

    /// Package manager: npm, yarn, pnpm or bun
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<String>,

    /// Directory whose presence means dependencies are installed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_dir: Option<PathBuf>,

    /// package.json script that starts the development server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_script: Option<String>,
}
