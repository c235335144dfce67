// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cooperative cancellation for the read loop.
//!
//! The loop does not try to interrupt a blocked read; it polls
//! [`signaled()`](CancellationSignal::signaled) at iteration boundaries, so
//! cancellation latency is bounded by the time until the next delivered
//! event. This matches the host's actual delivery model and is a deliberate
//! simplicity/latency trade-off, not a bug.

use miette::IntoDiagnostic;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide, pollable cancellation flag.
///
/// Armed when created, observed once per loop iteration, dropped when the
/// loop's owner is done with it. Clones share the same flag. The only
/// cross-thread state in this crate: the flag is set from an interrupt
/// handler thread and read by the loop thread.
#[derive(Clone, Debug, Default)]
pub struct CancellationSignal {
    flag: Arc<AtomicBool>,
}

impl CancellationSignal {
    /// A fresh, un-signaled flag. Used directly in tests and embeddings that
    /// deliver interrupts themselves.
    #[must_use]
    pub fn new() -> Self {
        CancellationSignal {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A flag that flips when the user interrupts the process (Ctrl-C).
    ///
    /// # Errors
    ///
    /// Fails when the process-wide interrupt handler cannot be installed
    /// (e.g. another handler is already registered).
    pub fn subscribe_ctrl_c() -> miette::Result<Self> {
        let signal = CancellationSignal::new();
        let flag = signal.flag.clone();
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .into_diagnostic()?;
        Ok(signal)
    }

    /// Request cancellation. Idempotent.
    pub fn signal(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Has cancellation been requested?
    #[must_use]
    pub fn signaled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod cancellation_tests {
    use super::*;

    #[test]
    fn test_starts_unsignaled_and_latches_on_signal() {
        let signal = CancellationSignal::new();
        assert!(!signal.signaled());

        signal.signal();
        assert!(signal.signaled());

        // Idempotent.
        signal.signal();
        assert!(signal.signaled());
    }

    #[test]
    fn test_clones_share_the_same_flag() {
        let signal = CancellationSignal::new();
        let observer = signal.clone();

        signal.signal();

        assert!(observer.signaled());
    }
}
