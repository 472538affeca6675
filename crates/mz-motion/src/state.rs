//! Motion phase.

use mz_core::{AgentState, MotionAction};

/// What the controller is doing this frame.
///
/// `Animating` carries the committed pose at the moment the action was
/// dequeued; the visible pose is always derived from `start` and `progress`,
/// never accumulated frame over frame.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum MotionPhase {
    /// Accepting continuous drive or the next queued action.
    #[default]
    Idle,

    Animating {
        action:   MotionAction,
        /// Fraction of the step completed, in `[0.0, 1.0]`.
        progress: f32,
        /// Committed pose when the action began.
        start:    AgentState,
    },
}

impl MotionPhase {
    /// Start animating `action` from `start`.
    #[inline]
    pub fn animating(action: MotionAction, start: AgentState) -> Self {
        MotionPhase::Animating { action, progress: 0.0, start }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, MotionPhase::Idle)
    }

    /// The in-flight action, if any.
    #[inline]
    pub fn action(&self) -> Option<MotionAction> {
        match self {
            MotionPhase::Idle => None,
            MotionPhase::Animating { action, .. } => Some(*action),
        }
    }

    /// Progress of the in-flight action; `1.0` when idle.
    pub fn progress(&self) -> f32 {
        match self {
            MotionPhase::Idle => 1.0,
            MotionPhase::Animating { progress, .. } => *progress,
        }
    }
}
