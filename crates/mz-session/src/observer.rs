//! Session observer trait for logging and trace output.

use mz_core::{AgentState, Frame};
use mz_lookahead::LookaheadSet;
use mz_motion::{Completion, MotionPhase};

use crate::{Decision, PolicyError, SessionEnd};

/// Callbacks invoked by [`Session::step`][crate::Session::step] and
/// [`Session::run`][crate::Session::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SessionObserver {
    /// Called at the end of every frame with the visible pose.
    fn on_frame(
        &mut self,
        _frame:        Frame,
        _elapsed_secs: f64,
        _pose:         &AgentState,
        _phase:        &MotionPhase,
    ) {}

    /// Called once per accepted decision, before its action is submitted.
    fn on_decision(
        &mut self,
        _frame:     Frame,
        _cycle:     u32,
        _decision:  &Decision,
        _lookahead: &LookaheadSet,
    ) {}

    /// Called when a decision cycle fails; the cycle is retried next frame.
    fn on_policy_error(&mut self, _frame: Frame, _error: &PolicyError) {}

    /// Called when the controller reports a finished action.
    fn on_completion(&mut self, _frame: Frame, _completion: &Completion) {}

    /// Called once when the session ends.
    fn on_session_end(&mut self, _frame: Frame, _end: SessionEnd) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
