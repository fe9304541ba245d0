//! The one-shot completion signal the actors race to resolve.
//!
//! A thin wrapper around [`tokio::sync::oneshot`]: the channel already
//! guarantees single assignment, this adds the "anyone may try, first writer
//! wins" part by parking the sender behind a mutex each resolver takes it
//! out of. Resolving an already-resolved signal is a no-op, so both actors
//! can race it without coordination.

use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::error::{GameError, Result};

/// What a game session ends with: `Ok(true)` for a win, `Ok(false)` for a
/// loss, `Err` for an abort with no verdict at all.
pub type Verdict = Result<bool>;

/// Resolver half of the signal. Clone one per actor.
#[derive(Clone)]
pub struct Completion {
    tx: Arc<Mutex<Option<oneshot::Sender<Verdict>>>>,
}

/// Waiter half, held by whoever is blocked on the session finishing.
pub struct Waiter {
    rx: oneshot::Receiver<Verdict>,
}

impl Completion {
    /// Create a fresh, unresolved signal pair.
    pub fn channel() -> (Completion, Waiter) {
        let (tx, rx) = oneshot::channel();
        (
            Completion {
                tx: Arc::new(Mutex::new(Some(tx))),
            },
            Waiter { rx },
        )
    }

    /// Resolve the signal. The first call wins; every later call is a no-op.
    pub fn resolve(&self, verdict: Verdict) {
        if let Some(tx) = self.tx.lock().expect("completion lock poisoned").take() {
            // the waiter may already be gone during teardown; fine either way
            let _ = tx.send(verdict);
        }
    }

    /// Whether anyone has resolved this signal yet.
    pub fn is_resolved(&self) -> bool {
        self.tx.lock().expect("completion lock poisoned").is_none()
    }
}

impl Waiter {
    /// Suspend until the signal resolves, then hand the verdict over.
    ///
    /// Resolution is exactly-once, so this resumes exactly once. If every
    /// [`Completion`] is dropped unresolved, the game never concluded and
    /// this reports the abort instead of hanging forever.
    pub async fn wait(self) -> Verdict {
        self.rx.await.unwrap_or(Err(GameError::Aborted))
    }
}
