//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    headers: Vec<String>,
    rules: usize,
    steps: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured banner names.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of rules shown.
    pub fn rules(&self) -> usize {
        self.rules
    }

    /// Get all captured step announcements.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }
}

impl UserInterface for MockUI {
    fn show_header(&mut self, app_name: &str) {
        self.headers.push(app_name.to_string());
    }

    fn show_rule(&mut self) {
        self.rules += 1;
    }

    fn step(&mut self, _icon: &str, msg: &str) {
        self.steps.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_kind_separately() {
        let mut ui = MockUI::new();
        ui.show_header("app");
        ui.show_rule();
        ui.step("📦", "Installing dependencies...");
        ui.success("done");
        ui.error("bad");
        ui.hint("try again");

        assert_eq!(ui.headers(), &["app".to_string()]);
        assert_eq!(ui.rules(), 1);
        assert_eq!(ui.steps(), &["Installing dependencies...".to_string()]);
        assert_eq!(ui.successes(), &["done".to_string()]);
        assert_eq!(ui.errors(), &["bad".to_string()]);
        assert_eq!(ui.hints(), &["try again".to_string()]);
        assert!(ui.warnings().is_empty());
    }
}
