//! The agent's continuous pose.

use std::f32::consts::TAU;
use std::fmt;

use crate::{GridPos, Point};

/// Normalize `angle` into `[0, 2π)`.
///
/// Negative angles wrap to the positive range.  `rem_euclid` can round a tiny
/// negative input up to exactly `2π` in `f32`; that case folds to `0`.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let r = angle.rem_euclid(TAU);
    if r >= TAU { 0.0 } else { r }
}

/// Position and facing of the agent.
///
/// `angle` is in radians and may hold any real value; it accumulates turns
/// without wrapping.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub position: Point,
    pub angle:    f32,
}

impl AgentState {
    #[inline]
    pub fn new(position: Point, angle: f32) -> Self {
        Self { position, angle }
    }

    /// An agent standing at the centre of `cell`.
    #[inline]
    pub fn at_cell(cell: GridPos, cell_size: f32, angle: f32) -> Self {
        Self::new(cell.center(cell_size), angle)
    }

    /// Unit vector the agent is facing: `(−sin θ, −cos θ)`.
    #[inline]
    pub fn forward(&self) -> Point {
        Point::new(-self.angle.sin(), -self.angle.cos())
    }

    /// The grid cell containing the agent's centre.
    #[inline]
    pub fn cell(&self, cell_size: f32) -> GridPos {
        self.position.to_grid(cell_size)
    }

    #[inline]
    pub fn normalized_angle(&self) -> f32 {
        normalize_angle(self.angle)
    }

    /// `true` if positions match within `eps` and the angles are equal
    /// modulo 2π within `eps`.
    pub fn approx_eq(&self, other: &AgentState, eps: f32) -> bool {
        let da = normalize_angle(self.angle - other.angle);
        self.position.approx_eq(other.position, eps) && (da <= eps || TAU - da <= eps)
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.3} rad", self.position, self.angle)
    }
}
