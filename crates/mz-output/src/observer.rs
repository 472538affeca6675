//! `TraceObserver<W>` — bridges `SessionObserver` to an `OutputWriter`.

use mz_core::{AgentState, Frame};
use mz_lookahead::LookaheadSet;
use mz_motion::{Completion, MotionPhase};
use mz_session::{Decision, PolicyError, SessionEnd, SessionObserver};

use crate::row::{CompletionRow, DecisionRow, PoseRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SessionObserver`] that writes poses, decisions and completions to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SessionObserver`
/// methods have no return value.  After `session.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:         W,
    /// Write a pose row every this many frames.
    pose_interval:  u64,
    policy_errors:  u64,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    /// Create an observer that records a pose row every frame.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pose_interval: 1,
            policy_errors: 0,
            last_error:    None,
        }
    }

    /// Record a pose row only on frames divisible by `frames` (0 → every frame).
    pub fn with_pose_interval(mut self, frames: u64) -> Self {
        self.pose_interval = frames.max(1);
        self
    }

    /// Failed decision cycles seen so far.
    pub fn policy_errors(&self) -> u64 {
        self.policy_errors
    }

    /// Take the stored write error (if any) after `session.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SessionObserver for TraceObserver<W> {
    fn on_frame(&mut self, frame: Frame, elapsed_secs: f64, pose: &AgentState, phase: &MotionPhase) {
        if frame.0 % self.pose_interval != 0 {
            return;
        }
        let row = PoseRow {
            frame:    frame.0,
            elapsed_secs,
            x:        pose.position.x,
            z:        pose.position.z,
            angle:    pose.angle,
            action:   phase.action(),
            progress: phase.progress(),
        };
        let result = self.writer.write_pose(&row);
        self.store_err(result);
    }

    fn on_decision(&mut self, frame: Frame, cycle: u32, decision: &Decision, lookahead: &LookaheadSet) {
        let row = DecisionRow {
            frame:              frame.0,
            cycle,
            action:             decision.action.as_str(),
            thought:            decision.thought.clone(),
            forward_blocked:    lookahead.forward.blocked,
            turn_left_blocked:  lookahead.turn_left.blocked,
            turn_right_blocked: lookahead.turn_right.blocked,
        };
        let result = self.writer.write_decision(&row);
        self.store_err(result);
    }

    fn on_policy_error(&mut self, _frame: Frame, _error: &PolicyError) {
        self.policy_errors += 1;
    }

    fn on_completion(&mut self, frame: Frame, completion: &Completion) {
        let row = CompletionRow {
            frame:   frame.0,
            seq:     completion.seq,
            action:  completion.action,
            blocked: completion.blocked,
            x:       completion.state.position.x,
            z:       completion.state.position.z,
            angle:   completion.state.angle,
        };
        let result = self.writer.write_completion(&row);
        self.store_err(result);
    }

    fn on_session_end(&mut self, _frame: Frame, _end: SessionEnd) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
