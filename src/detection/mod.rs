//! Project and package manager detection.

pub mod package_manager;
pub mod project;

pub use package_manager::PackageManager;
pub use project::{package_name, DEFAULT_APP_NAME};
