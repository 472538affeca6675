//! `MotionController` — owns the agent's pose and advances it once per frame.

use std::sync::mpsc::{self, Receiver, Sender};

use tracing::debug;

use mz_core::{AgentState, MotionAction, NavConfig};
use mz_grid::GridMap;

use crate::kinematics::{interpolate, terminal};
use crate::{ActionHandle, ActionQueue, Completion, DriveInput, MotionPhase, MotionResult};

/// What happened during one [`MotionController::tick`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Set on the frame a discrete action finished.
    pub completion:    Option<Completion>,
    /// Set if a continuous-drive translation was rejected by collision.
    pub drive_blocked: bool,
}

/// Tick-driven motion state machine for a single agent.
///
/// Sole owner of the agent's pose and the action queue.  See the crate docs
/// for the per-tick sequence.
pub struct MotionController {
    config:    NavConfig,
    /// Last committed (idle) pose.  Unchanged while animating.
    committed: AgentState,
    /// Visible pose: equals `committed` when idle, interpolated otherwise.
    pose:      AgentState,
    phase:     MotionPhase,
    queue:     ActionQueue,
    inbox:     Receiver<MotionAction>,
    outbox:    Sender<Completion>,
    finished:  u64,
}

impl MotionController {
    /// Create an idle controller at `start` and the handle that drives it.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not pass [`NavConfig::validate`].
    pub fn new(config: NavConfig, start: AgentState) -> MotionResult<(Self, ActionHandle)> {
        config.validate()?;
        let (action_tx, action_rx)         = mpsc::channel();
        let (completion_tx, completion_rx) = mpsc::channel();
        let controller = Self {
            config,
            committed: start,
            pose:      start,
            phase:     MotionPhase::Idle,
            queue:     ActionQueue::new(),
            inbox:     action_rx,
            outbox:    completion_tx,
            finished:  0,
        };
        Ok((controller, ActionHandle::new(action_tx, completion_rx)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// The committed pose.  While animating this is the pre-action snapshot.
    #[inline]
    pub fn committed(&self) -> AgentState {
        self.committed
    }

    /// The visible pose, interpolated while animating.
    #[inline]
    pub fn pose(&self) -> AgentState {
        self.pose
    }

    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase.is_idle()
    }

    /// Actions waiting behind the in-flight one.
    ///
    /// Actions still in the channel are not counted until the next tick.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Idle with an empty queue.
    pub fn is_settled(&self) -> bool {
        self.is_idle() && self.queue.is_empty()
    }

    /// Total discrete actions finished so far.
    pub fn finished(&self) -> u64 {
        self.finished
    }

    /// Queue `action` directly, bypassing the handle.
    pub fn enqueue(&mut self, action: MotionAction) {
        self.queue.push(action);
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance one frame of `dt` seconds.
    ///
    /// Negative or non-finite `dt` counts as zero.  `drive` is ignored unless
    /// the controller is idle with nothing queued.
    pub fn tick(&mut self, dt: f32, drive: &DriveInput, map: &GridMap) -> TickReport {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.queue.extend(self.inbox.try_iter());

        if self.phase.is_idle() {
            match self.queue.pop() {
                Some(action) => {
                    debug!(%action, state = %self.committed, "action started");
                    self.phase = MotionPhase::animating(action, self.committed);
                }
                None => {
                    let drive_blocked = self.drive(dt, drive, map);
                    return TickReport { completion: None, drive_blocked };
                }
            }
        }

        TickReport { completion: self.animate(dt, map), drive_blocked: false }
    }

    fn animate(&mut self, dt: f32, map: &GridMap) -> Option<Completion> {
        let MotionPhase::Animating { action, progress, start } = self.phase else {
            return None;
        };
        let progress = (progress + dt * self.config.animation_rate).min(1.0);

        if progress < 1.0 {
            self.phase = MotionPhase::Animating { action, progress, start };
            self.pose  = interpolate(&start, action, progress, &self.config);
            return None;
        }

        let target  = terminal(&start, action, &self.config);
        let blocked = action.is_translation() && map.collides(target.position, self.config.agent_radius);
        self.committed = if blocked { start } else { target };
        self.pose      = self.committed;
        self.phase     = MotionPhase::Idle;
        self.finished += 1;

        let completion = Completion {
            seq:     self.finished,
            action,
            blocked,
            state:   self.committed,
        };
        debug!(%action, blocked, state = %self.committed, "action finished");
        if self.outbox.send(completion).is_err() {
            debug!("completion receiver dropped");
        }
        Some(completion)
    }

    /// Apply continuous drive.  Returns `true` if a translation was rejected.
    fn drive(&mut self, dt: f32, drive: &DriveInput, map: &GridMap) -> bool {
        if drive.is_empty() || dt == 0.0 {
            return false;
        }
        let radius  = self.config.agent_radius;
        let step    = self.config.move_speed * dt;
        let heading = self.committed.forward();
        let mut blocked = false;

        for (held, sign) in [(drive.forward, 1.0), (drive.backward, -1.0)] {
            if !held {
                continue;
            }
            let candidate = self.committed.position + heading * (step * sign);
            if map.collides(candidate, radius) {
                blocked = true;
            } else {
                self.committed.position = candidate;
            }
        }

        let turn = self.config.turn_speed * dt;
        if drive.turn_left {
            self.committed.angle += turn;
        }
        if drive.turn_right {
            self.committed.angle -= turn;
        }

        self.pose = self.committed;
        blocked
    }

    /// Return to `state`, idle, with an empty queue.
    ///
    /// Unread actions in the channel are discarded too.  Completions already
    /// sent stay in the handle; drain them there if needed.
    pub fn reset(&mut self, state: AgentState) {
        let dropped = self.inbox.try_iter().count() + self.queue.len();
        self.queue.clear();
        self.phase     = MotionPhase::Idle;
        self.committed = state;
        self.pose      = state;
        debug!(dropped, %state, "controller reset");
    }
}
