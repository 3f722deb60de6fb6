//! Cooperative cancellation for a pipeline run.
//!
//! One token per run, one-way: once cancelled it stays cancelled. Blocking
//! channel operations race against [`CancelToken::observed`] with
//! `crossbeam_channel::select!` so no stage stays parked past a cancel.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Shared cancellation flag. Clones observe the same underlying state.
#[derive(Clone)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
    /// Dropping this sender disconnects `rx`, waking every select arm parked
    /// on the observation receiver.
    guard: Arc<Mutex<Option<Sender<()>>>>,
    rx: Receiver<()>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, rx) = bounded::<()>(0);
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            guard: Arc::new(Mutex::new(Some(tx))),
            rx,
        }
    }

    /// Signal cancellation. Idempotent; redundant calls have no further effect.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
        self.guard.lock().unwrap().take();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Receiver that never yields a message and disconnects when the token is
    /// cancelled. Use as a `recv` arm in `select!` against any send that must
    /// not outlive the run.
    pub fn observed(&self) -> &Receiver<()> {
        &self.rx
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
