//! Project metadata detection.

use std::path::Path;

use serde::Deserialize;

/// Name shown when the project doesn't declare one.
pub const DEFAULT_APP_NAME: &str = "application";

#[derive(Debug, Deserialize)]
struct PackageJson {
    name: Option<String>,
}

/// Read the `name` field from the project's `package.json`.
///
/// Returns `None` if the file is missing, unreadable, or has no name.
/// A broken `package.json` is the package manager's problem to report.
pub fn package_name(project_root: &Path) -> Option<String> {
    let path = project_root.join("package.json");
    let content = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<PackageJson>(&content) {
        Ok(pkg) => pkg.name.filter(|n| !n.trim().is_empty()),
        Err(e) => {
            tracing::debug!("Ignoring unparseable {}: {}", path.display(), e);
            None
        }
    }
}
