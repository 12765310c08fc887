//! Ctrl+C handling.
//!
//! The terminal sends SIGINT to the whole foreground process group, so a
//! running child sees it directly and exits on its own. The launcher only
//! records that it happened and checks the flag once the child returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag set when the user presses Ctrl+C.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    /// Create a flag that has not been raised.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a process-wide Ctrl+C handler that raises this flag.
    ///
    /// Only one handler can be installed per process.
    pub fn install(&self) -> anyhow::Result<()> {
        let raised = Arc::clone(&self.raised);
        ctrlc::set_handler(move || {
            tracing::debug!("Received Ctrl+C");
            raised.store(true, Ordering::SeqCst);
        })?;
        Ok(())
    }

    /// Mark the flag as raised.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// Whether an interrupt has been received.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_flag_is_not_raised() {
        assert!(!InterruptFlag::new().is_raised());
    }

    #[test]
    fn raise_is_visible_through_clones() {
        let flag = InterruptFlag::new();
        let clone = flag.clone();
        clone.raise();
        assert!(flag.is_raised());
    }

    #[test]
    fn raise_is_visible_across_threads() {
        let flag = InterruptFlag::new();
        let remote = flag.clone();
        std::thread::spawn(move || remote.raise()).join().unwrap();
        assert!(flag.is_raised());
    }
}
