// Tue Jan 13 2026 - Alex

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation signal checked by the scanner between
/// candidates.
///
/// A token may observe several flags: `linked` produces a token that reports
/// cancellation as soon as either source is cancelled, while cancelling it
/// only trips its own flag.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    flags: Vec<Arc<AtomicBool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self {
            flags: vec![Arc::new(AtomicBool::new(false))],
        }
    }

    pub fn cancel(&self) {
        self.flags[0].store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flags.iter().any(|f| f.load(Ordering::SeqCst))
    }

    pub fn linked(&self, other: &CancellationToken) -> Self {
        let mut flags = vec![Arc::new(AtomicBool::new(false))];
        flags.extend(self.flags.iter().cloned());
        flags.extend(other.flags.iter().cloned());
        Self { flags }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
