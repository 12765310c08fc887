//! Configuration loading.
//!
//! Configuration is optional. Without a `devlaunch.yml` the launcher
//! detects the package manager from lockfiles and runs `<pm> run dev`.

pub mod loader;
pub mod schema;

pub use loader::{
    apply_env_overrides, find_config, load_config, load_config_file, load_config_with_env,
    parse_config, CONFIG_FILE_NAMES, PACKAGE_MANAGER_ENV, RUNTIME_ENV,
};
pub use schema::LauncherConfig;
