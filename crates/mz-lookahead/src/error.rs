use mz_core::MotionAction;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookaheadError {
    /// Look-ahead is only defined from a committed, idle pose.
    #[error("cannot look ahead while {action} is animating (progress {progress:.2})")]
    Animating { action: MotionAction, progress: f32 },

    /// Idle, but queued actions will start on the next tick.
    #[error("cannot look ahead with {pending} action(s) queued")]
    Queued { pending: usize },
}

pub type LookaheadResult<T> = Result<T, LookaheadError>;
