//! Frame-driven time model.
//!
//! # Design
//!
//! The engine advances once per external frame callback.  Frames carry a
//! real-valued elapsed-time delta (seconds), so wall-clock time is the running
//! sum of deltas rather than `frame * fixed_step`.  `Frame` is the integer
//! counter used to label output rows and log events.

use std::fmt;

// ── Frame ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame(pub u64);

impl Frame {
    pub const ZERO: Frame = Frame(0);

    /// Frames elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Frame) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Frame {
    type Output = Frame;
    #[inline]
    fn add(self, rhs: u64) -> Frame {
        Frame(self.0 + rhs)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the current frame and accumulated simulated seconds.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    /// The frame about to be processed.
    pub current_frame: Frame,
    /// Sum of all deltas passed to [`advance`][Self::advance].
    pub elapsed_secs:  f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the current frame, which lasted `dt` seconds.
    ///
    /// Negative or non-finite deltas count as zero.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed_secs += dt as f64;
        }
        self.current_frame = self.current_frame + 1;
    }

    /// Return to frame zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_frame, self.elapsed_secs)
    }
}
