//! Typed-Text Driver
//!
//! Runs a [`TypedTextEngine`] on the current tokio runtime using the
//! schedule-next-on-completion pattern: render, compute delay, sleep, step,
//! repeat. Exactly one tick is pending at any moment, so ticks can never
//! overlap or queue up behind a slow callback.
//!
//! # Cancellation
//!
//! [`CancelHandle`] aborts the task at its next await point. The callback is
//! synchronous, so a tick that is already running finishes normally: after
//! `cancel` returns, at most that in-flight tick completes and nothing is
//! scheduled after it. Dropping the handle cancels too: when the owning view
//! goes away, the animation goes with it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use crate::engine::{EngineError, TypedTextEngine};

/// Handle to a running typed-text animation
#[derive(Debug)]
pub struct CancelHandle {
    abort: AbortHandle,
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Stop all future ticks
    ///
    /// Idempotent: calling it again, or after the task has already stopped,
    /// does nothing.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            self.abort.abort();
            tracing::debug!("Typed text animation cancelled");
        }
    }

    /// Whether [`cancel`](Self::cancel) has been called
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Whether the underlying task has stopped running
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.abort.is_finished()
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl TypedTextEngine {
    /// Start the animation on the current tokio runtime
    ///
    /// `on_update` receives the display string for the current state right
    /// away and again after every tick until the returned handle is
    /// cancelled or dropped. The engine is consumed, so one engine instance
    /// can only ever be started once; build a new engine per animation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TimerUnavailable`] when called outside a tokio
    /// runtime.
    pub fn start<F>(mut self, mut on_update: F) -> Result<CancelHandle, EngineError>
    where
        F: FnMut(&str) + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| EngineError::TimerUnavailable)?;
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        tracing::debug!(phrases = self.phrases().len(), "Typed text animation starting");

        let task = runtime.spawn(async move {
            loop {
                if flag.load(Ordering::SeqCst) {
                    break;
                }

                let text = self.display();
                on_update(&text);

                let delay = self.next_delay();
                tracing::trace!(
                    phrase_index = self.state().phrase_index(),
                    reveal_len = self.state().reveal_len(),
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "Typed text tick scheduled"
                );
                tokio::time::sleep(delay).await;

                self.step();
            }
        });

        Ok(CancelHandle {
            abort: task.abort_handle(),
            cancelled,
        })
    }
}
