//! Progress notification for long-running processing.
//!
//! Sinks are invoked once after every completed block and once more when a
//! strategy finishes. In concurrent mode the calls arrive interleaved from
//! several workers, so a sink must be `Sync` and must not assume any
//! ordering between notifications; the only guarantee is "some progress has
//! been made, and a final call fires after the run completes".

use std::sync::atomic::{AtomicU64, Ordering};

/// Receiver for block-completion notifications.
///
/// Implementations must be cheap and infallible; a sink that can fail
/// internally should record the failure and swallow it rather than panic.
pub trait ProgressSink: Sync {
    /// Called after each completed block, and once more after a whole run.
    fn block_done(&self);
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn block_done(&self) {}
}

/// Counts notifications in a shared atomic, suitable for polling from
/// another thread.
#[derive(Debug, Default)]
pub struct CountingSink {
    count: AtomicU64,
}

impl CountingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

impl ProgressSink for CountingSink {
    fn block_done(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }
}
