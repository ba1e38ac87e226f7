//! Easing Curves
//!
//! Maps linear progress (0.0 to 1.0) onto a curve. Surfaces use these for
//! skill bars growing to their level and the menu panel sliding in.

use std::time::Duration;

/// Easing functions for smooth animation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Fast start, slow end
    #[default]
    EaseOut,

    /// Stronger fast start, slow end
    EaseOutCubic,
}

impl Easing {
    /// Apply the curve to a progress value (clamped to 0.0..=1.0)
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::EaseOut => 1.0 - (1.0 - t).powi(2),
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }

    /// Eased progress for `elapsed` out of `duration`
    ///
    /// A zero duration is treated as already finished.
    #[must_use]
    pub fn at(self, elapsed: Duration, duration: Duration) -> f32 {
        if duration.is_zero() {
            return 1.0;
        }
        self.apply(elapsed.as_secs_f32() / duration.as_secs_f32())
    }
}
