//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, LaunchTheme, UserInterface};

/// Terminal UI implementation.
///
/// Progress goes to stdout; errors and hints go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: LaunchTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            LaunchTheme::new()
        } else {
            LaunchTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn show_header(&mut self, app_name: &str) {
        writeln!(self.out, "{}", self.theme.format_header(app_name)).ok();
        self.show_rule();
    }

    fn show_rule(&mut self) {
        writeln!(self.out, "{}", self.theme.rule()).ok();
    }

    fn step(&mut self, icon: &str, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_step(icon, msg)).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_hint(msg)).ok();
    }
}
