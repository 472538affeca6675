//! `PositionHistory` — the trail drawn on schematic observations.

use mz_core::Point;

/// Committed positions sampled on a fixed simulated-time interval.
///
/// The first sample is taken one full interval after the start (or after
/// [`clear`][Self::clear]).  A frame that crosses several interval
/// boundaries records one sample per boundary.
#[derive(Clone, Debug)]
pub struct PositionHistory {
    interval_secs: f64,
    next_at:       f64,
    points:        Vec<Point>,
}

impl PositionHistory {
    /// `interval_secs` must be positive; [`NavConfig::validate`][mz_core::NavConfig::validate]
    /// guarantees this for the configured value.
    pub fn new(interval_secs: f32) -> Self {
        let interval_secs = interval_secs as f64;
        Self { interval_secs, next_at: interval_secs, points: Vec::new() }
    }

    /// Record `position` for every interval boundary at or before `now_secs`.
    /// Returns the number of samples added.
    pub fn sample(&mut self, now_secs: f64, position: Point) -> usize {
        let mut added = 0;
        while now_secs >= self.next_at {
            self.points.push(position);
            self.next_at += self.interval_secs;
            added += 1;
        }
        added
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Forget all samples and restart the interval timer at zero.
    pub fn clear(&mut self) {
        self.points.clear();
        self.next_at = self.interval_secs;
    }
}
