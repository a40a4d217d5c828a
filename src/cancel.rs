//! Cooperative cancellation
//!
//! Engine operations poll a shared flag at every queue pop and bail out
//! with a `Cancelled` error once it is set. Timeouts live on the caller
//! side: arm a timer, cancel the token when it fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable cancellation flag shared between a caller and running walks
///
/// Cancellation is sticky: once requested, every operation holding a
/// clone of the token fails at its next queue pop. A fresh token is
/// needed per unit of cancellable work.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every operation holding a clone
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
