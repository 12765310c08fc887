//! devlaunch - start a JavaScript project's development server.
//!
//! devlaunch checks that the runtime and package manager are installed,
//! installs dependencies the first time, then hands the terminal to the
//! development server and exits with whatever code it exits with.
//!
//! # Modules
//!
//! - [`config`] - Optional `devlaunch.yml` and environment overrides
//! - [`detection`] - Package manager and project name detection
//! - [`error`] - Error types and result aliases
//! - [`launcher`] - The launch sequence and exit code mapping
//! - [`shell`] - Subprocess execution and Ctrl+C handling
//! - [`ui`] - Console output
//!
//! # Example
//!
//! ```
//! use devlaunch::detection::PackageManager;
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! std::fs::write(dir.path().join("yarn.lock"), "").unwrap();
//! assert_eq!(PackageManager::detect(dir.path()), PackageManager::Yarn);
//! ```

pub mod config;
pub mod detection;
pub mod error;
pub mod launcher;
pub mod shell;
pub mod ui;

pub use error::{LaunchError, Result};
