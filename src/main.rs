//! devlaunch CLI entry point.

use std::process::ExitCode;

use devlaunch::launcher::launch;
use devlaunch::shell::{InterruptFlag, SystemRunner};
use devlaunch::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by `RUST_LOG`; the default only shows
/// warnings so the console stays readable. Logs go to stderr.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devlaunch=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let mut ui = TerminalUI::new();

    let interrupt = InterruptFlag::new();
    if let Err(e) = interrupt.install() {
        tracing::warn!("Failed to set Ctrl+C handler: {}", e);
        ui.warning("Ctrl+C will stop the launcher immediately");
    }

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            ui.error(&format!("Unexpected error: {}", e));
            return ExitCode::from(1);
        }
    };

    ExitCode::from(launch(&project_root, SystemRunner, interrupt, &mut ui))
}
