//! Cooperative cancellation token (§5).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cheaply-cloneable cooperative cancellation flag.
///
/// [`crate::run_pipeline_cancellable`] checks this once between every stage
/// boundary. Checking it is the only contract — nothing in the pipeline
/// polls a timer or spawns a watcher thread, which would be out of
/// proportion to a single-threaded, non-I/O library (§5).
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent; safe to call from another thread.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
