//! Predicted outcomes.

use std::fmt;

use mz_core::{AgentState, MotionAction};

/// Where one action would leave the agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Outcome {
    pub action:  MotionAction,
    /// Terminal pose; the start pose when `blocked`.
    pub state:   AgentState,
    /// `true` if the step's target collides.  Turns are never blocked.
    pub blocked: bool,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.action, self.state)?;
        if self.blocked {
            f.write_str(" (blocked)")?;
        }
        Ok(())
    }
}

/// One [`Outcome`] per evaluable action.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LookaheadSet {
    pub forward:    Outcome,
    pub turn_left:  Outcome,
    pub turn_right: Outcome,
}

impl LookaheadSet {
    pub fn get(&self, action: MotionAction) -> &Outcome {
        match action {
            MotionAction::MoveForward => &self.forward,
            MotionAction::TurnLeft    => &self.turn_left,
            MotionAction::TurnRight   => &self.turn_right,
        }
    }

    /// Outcomes in [`MotionAction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        [&self.forward, &self.turn_left, &self.turn_right].into_iter()
    }

    /// Actions whose outcome is not blocked.
    pub fn open_actions(&self) -> impl Iterator<Item = MotionAction> + '_ {
        self.iter().filter(|o| !o.blocked).map(|o| o.action)
    }
}
