//! Pose arithmetic for discrete steps.
//!
//! Both the controller's animation and the look-ahead simulator go through
//! these two functions, so a simulated outcome and a committed one can never
//! disagree about where a step ends.

use mz_core::{AgentState, MotionAction, NavConfig};

/// The pose `progress` of the way through `action`, starting from `start`.
///
/// `progress` is expected in `[0.0, 1.0]`.  Forward steps move
/// `cell_size * progress` along the starting heading; turns rotate by
/// `±turn_step * progress` in place.
#[inline]
pub fn interpolate(
    start:    &AgentState,
    action:   MotionAction,
    progress: f32,
    config:   &NavConfig,
) -> AgentState {
    if action.is_translation() {
        let offset = start.forward() * (config.cell_size * progress);
        AgentState::new(start.position + offset, start.angle)
    } else {
        let delta = action.turn_sign() * config.turn_step * progress;
        AgentState::new(start.position, start.angle + delta)
    }
}

/// The full-step pose of `action` from `start`, ignoring collisions.
#[inline]
pub fn terminal(start: &AgentState, action: MotionAction, config: &NavConfig) -> AgentState {
    interpolate(start, action, 1.0, config)
}
