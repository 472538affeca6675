//! Engine configuration.
//!
//! Typically deserialized from JSON by the application crate (with the
//! `serde` feature) and passed to the motion controller and session.

use std::f32::consts::FRAC_PI_2;

use crate::{NavError, NavResult};

/// Cell edge length of the reference maze, in continuous units.
pub const CELL_SIZE: f32 = 2.0;
/// Radius of the agent's collision circle.
pub const AGENT_RADIUS: f32 = 0.4;
/// Continuous-drive translation speed, units per second.
pub const MOVE_SPEED: f32 = 3.0;
/// Continuous-drive rotation speed, radians per second.
pub const TURN_SPEED: f32 = 2.0;
/// Discrete-step animation progress per second (a step takes 0.5 s).
pub const ANIMATION_RATE: f32 = 2.0;
/// Position-history sample interval, seconds.
pub const HISTORY_INTERVAL_SECS: f32 = 0.5;

/// Tunable motion and geometry parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Cell edge length.  Grid ↔ continuous conversion is a pure scale by
    /// this value.
    pub cell_size: f32,

    /// Collision radius.  Must be smaller than `cell_size / 2`; the 3×3
    /// collision neighbourhood is only exact under that bound.
    pub agent_radius: f32,

    /// Continuous-drive speed (units/s).
    pub move_speed: f32,

    /// Continuous-drive turn rate (rad/s).
    pub turn_speed: f32,

    /// Discrete-step progress per second.  Progress runs from 0 to 1.
    pub animation_rate: f32,

    /// Rotation applied by one discrete turn (rad).  Default π/2.
    pub turn_step: f32,

    /// How often the session records the committed position into its
    /// trail history (s).
    pub history_interval_secs: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            cell_size:             CELL_SIZE,
            agent_radius:          AGENT_RADIUS,
            move_speed:            MOVE_SPEED,
            turn_speed:            TURN_SPEED,
            animation_rate:        ANIMATION_RATE,
            turn_step:             FRAC_PI_2,
            history_interval_secs: HISTORY_INTERVAL_SECS,
        }
    }
}

impl NavConfig {
    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> NavResult<()> {
        let positive = [
            ("cell_size",             self.cell_size),
            ("agent_radius",          self.agent_radius),
            ("animation_rate",        self.animation_rate),
            ("history_interval_secs", self.history_interval_secs),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(NavError::Config(format!("{name} must be positive, got {value}")));
            }
        }
        let non_negative = [
            ("move_speed", self.move_speed),
            ("turn_speed", self.turn_speed),
            ("turn_step",  self.turn_step),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(NavError::Config(format!("{name} must be non-negative, got {value}")));
            }
        }
        if self.agent_radius >= self.cell_size * 0.5 {
            return Err(NavError::Config(format!(
                "agent_radius {} must be smaller than half the cell size ({})",
                self.agent_radius,
                self.cell_size * 0.5,
            )));
        }
        Ok(())
    }

    /// Seconds one discrete step takes to animate.
    #[inline]
    pub fn step_duration_secs(&self) -> f32 {
        1.0 / self.animation_rate
    }
}
