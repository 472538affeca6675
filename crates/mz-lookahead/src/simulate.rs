//! The simulator.

use mz_core::{AgentState, MotionAction, NavConfig};
use mz_grid::GridMap;
use mz_motion::kinematics::terminal;
use mz_motion::{MotionController, MotionPhase};

use crate::{LookaheadError, LookaheadResult, LookaheadSet, Outcome};

/// Predict every action from `state`.
///
/// Uses the same full-step kinematics and collision test the controller
/// applies when an action lands, so each outcome is exactly what committing
/// that action would produce.  Pure: calling it any number of times with the
/// same arguments gives the same answer.
pub fn simulate(state: &AgentState, map: &GridMap, config: &NavConfig) -> LookaheadSet {
    let outcome = |action| predict(state, action, map, config);
    LookaheadSet {
        forward:    outcome(MotionAction::MoveForward),
        turn_left:  outcome(MotionAction::TurnLeft),
        turn_right: outcome(MotionAction::TurnRight),
    }
}

/// [`simulate`] from a controller's committed pose.
///
/// # Errors
///
/// The committed pose must be about to stay put:
/// - [`LookaheadError::Animating`] if an action is in flight;
/// - [`LookaheadError::Queued`] if idle with actions queued.
///
/// Actions still in the handle's channel are invisible until the next tick;
/// callers that submit through an [`ActionHandle`][mz_motion::ActionHandle]
/// must not look ahead between submitting and ticking.
pub fn simulate_controller(controller: &MotionController, map: &GridMap) -> LookaheadResult<LookaheadSet> {
    if let MotionPhase::Animating { action, progress, .. } = controller.phase() {
        return Err(LookaheadError::Animating { action, progress });
    }
    if !controller.is_settled() {
        return Err(LookaheadError::Queued { pending: controller.pending() });
    }
    Ok(simulate(&controller.committed(), map, controller.config()))
}

fn predict(state: &AgentState, action: MotionAction, map: &GridMap, config: &NavConfig) -> Outcome {
    let target  = terminal(state, action, config);
    let blocked = action.is_translation() && map.collides(target.position, config.agent_radius);
    Outcome {
        action,
        state: if blocked { *state } else { target },
        blocked,
    }
}
