//! Hero Ticker
//!
//! Thin client around the core typed-text driver. The engine runs on its
//! own task and publishes each display string into a `watch` channel; the
//! app reads the latest value when it renders and wakes on changes.

use tokio::sync::watch;

use folio_core::{CancelHandle, EngineError, PhraseList, TypedTextEngine, TypingCadence};

/// Live typed-text line for the hero section
pub struct HeroTicker {
    rx: watch::Receiver<String>,
    handle: CancelHandle,
}

impl HeroTicker {
    /// Start the animation on the current runtime
    ///
    /// # Errors
    ///
    /// Fails when called outside a tokio runtime.
    pub fn start(phrases: PhraseList, cadence: TypingCadence) -> Result<Self, EngineError> {
        Self::from_engine(TypedTextEngine::new(phrases, cadence))
    }

    /// Start an already configured engine (seeded engines in tests)
    ///
    /// # Errors
    ///
    /// Fails when called outside a tokio runtime.
    pub fn from_engine(engine: TypedTextEngine) -> Result<Self, EngineError> {
        let (tx, rx) = watch::channel(String::new());
        let handle = engine.start(move |text| {
            // pause ticks repeat the previous text; no need to wake the app
            tx.send_if_modified(|current| {
                if current.as_str() == text {
                    return false;
                }
                text.clone_into(current);
                true
            });
        })?;
        Ok(Self { rx, handle })
    }

    /// Latest text
    pub fn text(&self) -> String {
        self.rx.borrow().clone()
    }

    /// Wait until the text changes
    ///
    /// Returns `false` once the animation has stopped for good.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Stop the animation (also happens on drop)
    pub fn stop(&self) {
        self.handle.cancel();
    }

    /// Whether the animation was stopped or its task has ended
    pub fn is_stopped(&self) -> bool {
        self.handle.is_cancelled() || self.handle.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ticker(phrase: &str) -> HeroTicker {
        let cadence = TypingCadence::default().with_jitter(Duration::ZERO);
        HeroTicker::start(PhraseList::new([phrase]).unwrap(), cadence).unwrap()
    }

    #[test]
    fn test_requires_runtime() {
        let result = HeroTicker::start(PhraseList::new(["Hi"]).unwrap(), TypingCadence::default());
        assert!(matches!(result, Err(EngineError::TimerUnavailable)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_text_follows_engine() {
        let mut ticker = ticker("Hi");
        assert_eq!(ticker.text(), "");

        assert!(ticker.changed().await);
        assert_eq!(ticker.text(), "H");

        assert!(ticker.changed().await);
        assert_eq!(ticker.text(), "Hi|");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_ends_updates() {
        let mut ticker = ticker("Hello");
        tokio::time::sleep(Duration::from_millis(60)).await;
        ticker.stop();
        assert!(ticker.is_stopped());

        // drains the pending "H", then the sender drops with the aborted task
        while ticker.changed().await {}
        assert_eq!(ticker.text(), "H");
    }
}
