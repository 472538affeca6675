//! The discrete action vocabulary shared by the decision loop, the motion
//! controller, and the look-ahead simulator.
//!
//! [`Action`] is everything a decision may name, including `stop`.
//! [`MotionAction`] is the subset that moves the agent; only these ever enter
//! the action queue or get simulated.

use std::fmt;
use std::str::FromStr;

use crate::NavError;

// ── Action ────────────────────────────────────────────────────────────────────

/// One of the four symbols a decision service may return.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    MoveForward,
    TurnLeft,
    TurnRight,
    /// End the session.  Never interpreted as a motion primitive.
    Stop,
}

impl Action {
    /// Wire symbol, e.g. `"move_forward"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::MoveForward => "move_forward",
            Action::TurnLeft    => "turn_left",
            Action::TurnRight   => "turn_right",
            Action::Stop        => "stop",
        }
    }

    /// The motion primitive behind this action, or `None` for `Stop`.
    #[inline]
    pub fn as_motion(self) -> Option<MotionAction> {
        match self {
            Action::MoveForward => Some(MotionAction::MoveForward),
            Action::TurnLeft    => Some(MotionAction::TurnLeft),
            Action::TurnRight   => Some(MotionAction::TurnRight),
            Action::Stop        => None,
        }
    }
}

impl FromStr for Action {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "move_forward" => Ok(Action::MoveForward),
            "turn_left"    => Ok(Action::TurnLeft),
            "turn_right"   => Ok(Action::TurnRight),
            "stop"         => Ok(Action::Stop),
            other          => Err(NavError::UnknownAction(other.to_owned())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── MotionAction ──────────────────────────────────────────────────────────────

/// A discrete step the motion controller can animate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MotionAction {
    /// One full cell edge length along the facing direction.
    MoveForward,
    /// Rotate by `+turn_step` (counter-clockwise seen from above).
    TurnLeft,
    /// Rotate by `−turn_step`.
    TurnRight,
}

impl MotionAction {
    /// Every evaluable action, in look-ahead order.
    pub const ALL: [MotionAction; 3] = [
        MotionAction::MoveForward,
        MotionAction::TurnLeft,
        MotionAction::TurnRight,
    ];

    pub fn as_str(self) -> &'static str {
        Action::from(self).as_str()
    }

    /// Sign of the rotation this action applies: `+1` left, `−1` right,
    /// `0` for a forward step.
    #[inline]
    pub fn turn_sign(self) -> f32 {
        match self {
            MotionAction::MoveForward => 0.0,
            MotionAction::TurnLeft    => 1.0,
            MotionAction::TurnRight   => -1.0,
        }
    }

    /// `true` for the translating action; only this one can be blocked.
    #[inline]
    pub fn is_translation(self) -> bool {
        matches!(self, MotionAction::MoveForward)
    }
}

impl From<MotionAction> for Action {
    fn from(action: MotionAction) -> Action {
        match action {
            MotionAction::MoveForward => Action::MoveForward,
            MotionAction::TurnLeft    => Action::TurnLeft,
            MotionAction::TurnRight   => Action::TurnRight,
        }
    }
}

impl fmt::Display for MotionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
