//! Console output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use devlaunch::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("my-app");
//! ui.success("Node.js detected");
//! assert_eq!(ui.successes(), &["Node.js detected".to_string()]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, LaunchTheme, RULE_WIDTH};

/// Trait for user-facing console output.
///
/// This trait allows mocking the UI in tests. Everything shown here is
/// informational; the launcher's contract is its exit code.
pub trait UserInterface {
    /// Show the startup banner.
    fn show_header(&mut self, app_name: &str);

    /// Show a horizontal rule.
    fn show_rule(&mut self);

    /// Announce a step that is about to run.
    fn step(&mut self, icon: &str, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a hint that follows an error.
    fn hint(&mut self, msg: &str);
}
