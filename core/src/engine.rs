//! Typed-Text Engine
//!
//! The hero line's "I'm a ..." effect: each phrase is typed one character
//! at a time, held for a moment with a cursor glyph, erased, and the next
//! phrase begins. The cycle never ends on its own.
//!
//! # Design
//!
//! The machine is split into pure pieces and one owner:
//!
//! - [`transition`] computes the next [`TypedState`] from the current one
//! - [`display_string`] renders a state to the text a surface should show
//! - [`TypingCadence`] decides how long to wait before the next tick
//! - [`TypedTextEngine`] owns the state, the phrases, and the jitter RNG
//!
//! Hosts either drive the engine themselves with [`TypedTextEngine::tick`]
//! (frame loops) or hand it to the async driver with
//! [`TypedTextEngine::start`](crate::driver).
//!
//! # State Machine
//!
//! ```text
//!   (i, 0, Growing) ──reveal──▶ ... ──reveal──▶ (i, len, Growing)   "phrase|"
//!                                                     │ reveal (hold delay)
//!                                                     ▼
//!                                              (i, len+1, Growing)  pause tick
//!                                                     │ reverse
//!                                                     ▼
//!   (i, 0, Shrinking) ◀──erase── ... ◀──erase── (i, len+1, Shrinking)
//!          │ advance (pause tick)
//!          ▼
//!   (i+1 mod n, 0, Growing)
//! ```

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Glyph appended at the instant a phrase is fully typed
pub const CURSOR_GLYPH: char = '|';

/// Floor for every scheduled delay, so no tick is ever scheduled at zero
const MIN_TICK_MS: u64 = 1;

const DEFAULT_TYPING_MS: u64 = 50;
const DEFAULT_ERASING_MS: u64 = 75;
const DEFAULT_HOLD_MS: u64 = 1000;
const DEFAULT_JITTER_MS: u64 = 100;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised by the typed-text engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The phrase list had no entries
    #[error("phrase list is empty: at least one phrase is required")]
    EmptyPhraseList,

    /// A phrase in the list was the empty string
    #[error("phrase at index {index} is empty")]
    EmptyPhrase {
        /// Position of the offending phrase
        index: usize,
    },

    /// There is no runtime to host the driver's timer
    #[error("no timer available: the typed-text driver must be started inside a tokio runtime")]
    TimerUnavailable,
}

// ============================================================================
// Phrases
// ============================================================================

/// Validated, non-empty list of non-empty phrases
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<String>,
}

impl PhraseList {
    /// Build a phrase list, rejecting empty lists and empty phrases
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyPhraseList`] when no phrases are given and
    /// [`EngineError::EmptyPhrase`] when any phrase is `""`.
    pub fn new<I, S>(phrases: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();

        if phrases.is_empty() {
            return Err(EngineError::EmptyPhraseList);
        }
        if let Some(index) = phrases.iter().position(String::is_empty) {
            return Err(EngineError::EmptyPhrase { index });
        }

        Ok(Self { phrases })
    }

    /// Number of phrases (always at least one)
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always `false`; present for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Get a phrase by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.phrases.get(index).map(String::as_str)
    }

    /// Iterate over the phrases in cycle order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Phrase at `index`, wrapping around the list
    fn phrase(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }

    /// Length of a phrase in characters (not bytes)
    #[must_use]
    pub fn char_len(&self, index: usize) -> usize {
        self.phrase(index).chars().count()
    }
}

// ============================================================================
// State
// ============================================================================

/// Whether characters are currently being typed or erased
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Reveal length is increasing
    #[default]
    Growing,
    /// Reveal length is decreasing
    Shrinking,
}

/// Snapshot of the animation: active phrase, reveal length, direction
///
/// `reveal_len` ranges over `0..=len + 1`; the `len + 1` value is the
/// "fully shown, about to reverse" sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypedState {
    phrase_index: usize,
    reveal_len: usize,
    direction: Direction,
}

impl TypedState {
    /// Build an arbitrary state (for rendering previews and tests)
    #[must_use]
    pub const fn new(phrase_index: usize, reveal_len: usize, direction: Direction) -> Self {
        Self {
            phrase_index,
            reveal_len,
            direction,
        }
    }

    /// The state every engine starts in: `(0, 0, Growing)`
    #[must_use]
    pub const fn initial() -> Self {
        Self::new(0, 0, Direction::Growing)
    }

    /// Index of the active phrase
    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Number of leading characters shown
    #[must_use]
    pub fn reveal_len(&self) -> usize {
        self.reveal_len
    }

    /// Current direction
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// What a single tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// One more character shown
    Reveal,
    /// One character removed
    Erase,
    /// Growing flipped to shrinking (pause tick)
    Reverse,
    /// Moved on to the next phrase (pause tick)
    Advance,
}

/// Compute the next state from the current one
///
/// Exactly one of {reveal length change, direction flip, phrase advance}
/// happens per call.
#[must_use]
pub fn transition(
    state: TypedState,
    phrase_len: usize,
    phrase_count: usize,
) -> (TypedState, Transition) {
    match state.direction {
        Direction::Growing if state.reveal_len > phrase_len => (
            TypedState {
                direction: Direction::Shrinking,
                ..state
            },
            Transition::Reverse,
        ),
        Direction::Shrinking if state.reveal_len == 0 => (
            TypedState {
                phrase_index: (state.phrase_index + 1) % phrase_count.max(1),
                reveal_len: 0,
                direction: Direction::Growing,
            },
            Transition::Advance,
        ),
        Direction::Growing => (
            TypedState {
                reveal_len: state.reveal_len + 1,
                ..state
            },
            Transition::Reveal,
        ),
        Direction::Shrinking => (
            TypedState {
                reveal_len: state.reveal_len - 1,
                ..state
            },
            Transition::Erase,
        ),
    }
}

/// Text to show for a state
///
/// The first `min(reveal_len, len)` characters of the active phrase, with
/// [`CURSOR_GLYPH`] appended only when `reveal_len == len`. The rule is
/// position-based: the glyph shows at that length in either direction.
#[must_use]
pub fn display_string(phrases: &PhraseList, state: &TypedState) -> String {
    let phrase = phrases.phrase(state.phrase_index);
    let len = phrase.chars().count();

    let mut text: String = phrase.chars().take(state.reveal_len.min(len)).collect();
    if state.reveal_len == len {
        text.push(CURSOR_GLYPH);
    }
    text
}

// ============================================================================
// Timing
// ============================================================================

/// Delays between ticks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingCadence {
    /// Delay between typed characters
    pub typing: Duration,
    /// Delay between erased characters
    pub erasing: Duration,
    /// Hold once a phrase is fully typed
    pub hold: Duration,
    /// Upper bound of the uniform jitter added to every delay
    pub jitter_max: Duration,
}

impl Default for TypingCadence {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(DEFAULT_TYPING_MS),
            erasing: Duration::from_millis(DEFAULT_ERASING_MS),
            hold: Duration::from_millis(DEFAULT_HOLD_MS),
            jitter_max: Duration::from_millis(DEFAULT_JITTER_MS),
        }
    }
}

impl TypingCadence {
    /// Set the typing delay
    #[must_use]
    pub fn with_typing(mut self, typing: Duration) -> Self {
        self.typing = typing;
        self
    }

    /// Set the erasing delay
    #[must_use]
    pub fn with_erasing(mut self, erasing: Duration) -> Self {
        self.erasing = erasing;
        self
    }

    /// Set the hold delay
    #[must_use]
    pub fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    /// Set the jitter upper bound (zero disables jitter)
    #[must_use]
    pub fn with_jitter(mut self, jitter_max: Duration) -> Self {
        self.jitter_max = jitter_max;
        self
    }

    /// Delay before the next tick, excluding jitter
    ///
    /// Erasing while shrinking, hold when growing at exactly the phrase
    /// length, typing otherwise. Never below 1 ms.
    #[must_use]
    pub fn base_delay(&self, state: &TypedState, phrase_len: usize) -> Duration {
        let base = match state.direction {
            Direction::Shrinking => self.erasing,
            Direction::Growing if state.reveal_len == phrase_len => self.hold,
            Direction::Growing => self.typing,
        };
        base.max(Duration::from_millis(MIN_TICK_MS))
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Output of one synchronous tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Text to display now
    pub text: String,
    /// How long to wait before the next tick
    pub delay: Duration,
    /// What the tick did
    pub transition: Transition,
}

/// Typed-text animation engine owning one independent animation
#[derive(Debug)]
pub struct TypedTextEngine {
    phrases: PhraseList,
    state: TypedState,
    cadence: TypingCadence,
    rng: StdRng,
}

impl TypedTextEngine {
    /// Create an engine in the initial state
    #[must_use]
    pub fn new(phrases: PhraseList, cadence: TypingCadence) -> Self {
        Self {
            phrases,
            state: TypedState::initial(),
            cadence,
            rng: StdRng::from_entropy(),
        }
    }

    /// Validate phrases and create an engine with the default cadence
    ///
    /// # Errors
    ///
    /// Fails when the phrase list is empty or contains an empty phrase.
    pub fn from_phrases<I, S>(phrases: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(PhraseList::new(phrases)?, TypingCadence::default()))
    }

    /// Use a seeded RNG for jitter (deterministic delays)
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> TypedState {
        self.state
    }

    /// Configured phrases
    #[must_use]
    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    /// Configured cadence
    #[must_use]
    pub fn cadence(&self) -> TypingCadence {
        self.cadence
    }

    /// The phrase currently being typed or erased
    #[must_use]
    pub fn active_phrase(&self) -> &str {
        self.phrases.phrase(self.state.phrase_index)
    }

    /// Text for the current state
    #[must_use]
    pub fn display(&self) -> String {
        display_string(&self.phrases, &self.state)
    }

    /// Apply one transition to the owned state
    pub fn step(&mut self) -> Transition {
        let phrase_len = self.phrases.char_len(self.state.phrase_index);
        let (next, kind) = transition(self.state, phrase_len, self.phrases.len());

        match kind {
            Transition::Advance => tracing::debug!(
                phrase_index = next.phrase_index,
                phrase = self.phrases.phrase(next.phrase_index),
                "Typed text advancing to next phrase"
            ),
            Transition::Reverse => tracing::trace!(
                phrase_index = next.phrase_index,
                "Typed text reversing"
            ),
            Transition::Reveal | Transition::Erase => {}
        }

        self.state = next;
        kind
    }

    /// Delay before the next tick: base delay plus uniform jitter
    pub fn next_delay(&mut self) -> Duration {
        let phrase_len = self.phrases.char_len(self.state.phrase_index);
        let base = self.cadence.base_delay(&self.state, phrase_len);

        let jitter_ms = u64::try_from(self.cadence.jitter_max.as_millis()).unwrap_or(u64::MAX);
        let jitter = if jitter_ms == 0 {
            0
        } else {
            self.rng.gen_range(0..=jitter_ms)
        };

        base.saturating_add(Duration::from_millis(jitter))
    }

    /// Advance one step and report what to show and how long to wait
    ///
    /// For hosts with their own frame loop: show [`display`](Self::display)
    /// first, wait [`next_delay`](Self::next_delay), then call `tick` each
    /// time the returned delay elapses.
    pub fn tick(&mut self) -> Frame {
        let transition = self.step();
        Frame {
            text: self.display(),
            delay: self.next_delay(),
            transition,
        }
    }
}
