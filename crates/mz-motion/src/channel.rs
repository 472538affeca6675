//! The explicit action/completion channel between the decision loop and the
//! motion controller.
//!
//! [`MotionController::new`][crate::MotionController::new] returns an
//! [`ActionHandle`] alongside the controller.  The handle's owner submits
//! actions and waits for completions; nothing is reached through globals.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use mz_core::{Action, AgentState, MotionAction};

use crate::{MotionError, MotionResult};

/// Notification that one discrete action finished animating.
///
/// Sent exactly once per dequeued action, blocked or not.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Completion {
    /// Running count of finished actions, starting at 1.
    pub seq:     u64,
    pub action:  MotionAction,
    /// `true` if a forward step was rolled back because its target collided.
    pub blocked: bool,
    /// Committed pose after the action.
    pub state:   AgentState,
}

/// What [`ActionHandle::submit`] did with an action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Sent to the controller; it will start once every earlier action is done.
    Queued(MotionAction),
    /// `stop` is never a motion primitive; the caller should end the session.
    Stop,
}

/// Decision-loop side of the controller's channels.
pub struct ActionHandle {
    actions:     Sender<MotionAction>,
    completions: Receiver<Completion>,
}

impl ActionHandle {
    pub(crate) fn new(actions: Sender<MotionAction>, completions: Receiver<Completion>) -> Self {
        Self { actions, completions }
    }

    /// Submit a decided action.
    ///
    /// # Errors
    ///
    /// [`MotionError::ControllerGone`] if the controller has been dropped.
    pub fn submit(&self, action: Action) -> MotionResult<Submission> {
        let Some(motion) = action.as_motion() else {
            return Ok(Submission::Stop);
        };
        self.actions.send(motion).map_err(|_| MotionError::ControllerGone)?;
        Ok(Submission::Queued(motion))
    }

    /// Parse and submit a wire symbol such as `"turn_left"`.
    ///
    /// Unknown symbols fail with [`MotionError::Nav`] and nothing is sent.
    pub fn submit_symbol(&self, symbol: &str) -> MotionResult<Submission> {
        let action: Action = symbol.parse()?;
        self.submit(action)
    }

    /// The oldest unread completion, if one has arrived.
    pub fn try_completion(&self) -> MotionResult<Option<Completion>> {
        match self.completions.try_recv() {
            Ok(c) => Ok(Some(c)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(MotionError::ControllerGone),
        }
    }

    /// Block until a completion arrives or `timeout` elapses.
    ///
    /// Only useful when the controller ticks on another thread.
    pub fn wait_completion(&self, timeout: Duration) -> MotionResult<Completion> {
        match self.completions.recv_timeout(timeout) {
            Ok(c) => Ok(c),
            Err(RecvTimeoutError::Timeout) => Err(MotionError::Timeout(timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(MotionError::ControllerGone),
        }
    }

    /// Discard every unread completion, returning how many were dropped.
    pub fn drain_completions(&self) -> usize {
        self.completions.try_iter().count()
    }
}
