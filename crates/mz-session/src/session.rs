//! The `Session` struct and its frame loop.

use tracing::{debug, info, warn};

use mz_core::{AgentState, Frame, FrameClock, MotionAction};
use mz_encode::{AsciiHistory, SchematicEncoder, encode_ascii};
use mz_grid::GridMap;
use mz_lookahead::simulate_controller;
use mz_motion::{ActionHandle, DriveInput, MotionController, Submission};

use crate::{
    DecisionPolicy, Observation, ObservationBody, ObservationMode, PositionHistory, SessionConfig,
    SessionError, SessionObserver, SessionResult,
};

/// Why a session stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The policy answered `stop`.
    Stopped,
    /// `max_cycles` decisions were made and the last one finished.
    CycleLimit,
    /// [`Session::run`] hit `max_frames`.
    FrameLimit,
}

/// What happened during one [`Session::step`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub frame:         Frame,
    /// Set if a decision cycle ran this frame (successfully or not).
    pub decided:       bool,
    /// Action submitted this frame, if any.
    pub submitted:     Option<MotionAction>,
    /// Completions drained from the handle this frame.
    pub completions:   usize,
    pub drive_blocked: bool,
    pub ended:         Option<SessionEnd>,
}

/// Owns every engine component and drives them once per frame.
///
/// The session plays the decision loop's role: it holds the
/// [`ActionHandle`], submits decided actions through it, and treats a
/// decision as outstanding until the matching completion arrives.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct Session<P: DecisionPolicy> {
    config:       SessionConfig,
    map:          GridMap,
    controller:   MotionController,
    handle:       ActionHandle,
    policy:       P,
    schematic:    SchematicEncoder,
    clock:        FrameClock,
    positions:    PositionHistory,
    ascii:        AsciiHistory,
    start_angle:  f32,
    agent_active: bool,
    drive:        DriveInput,
    /// Action submitted and not yet reported complete.
    outstanding:  Option<MotionAction>,
    cycles:       u32,
    ended:        Option<SessionEnd>,
}

impl<P: DecisionPolicy> Session<P> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        config:       SessionConfig,
        map:          GridMap,
        controller:   MotionController,
        handle:       ActionHandle,
        policy:       P,
        schematic:    SchematicEncoder,
        start_angle:  f32,
        agent_active: bool,
    ) -> Self {
        let positions = PositionHistory::new(config.nav.history_interval_secs);
        Self {
            config,
            map,
            controller,
            handle,
            policy,
            schematic,
            clock:       FrameClock::new(),
            positions,
            ascii:       AsciiHistory::new(),
            start_angle,
            agent_active,
            drive:       DriveInput::NONE,
            outstanding: None,
            cycles:      0,
            ended:       None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn positions(&self) -> &PositionHistory {
        &self.positions
    }

    pub fn ascii_history(&self) -> &AsciiHistory {
        &self.ascii
    }

    /// Committed pose.
    pub fn state(&self) -> AgentState {
        self.controller.committed()
    }

    /// Decisions accepted so far.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn ended(&self) -> Option<SessionEnd> {
        self.ended
    }

    /// `true` if the committed pose is on the goal cell.
    pub fn at_goal(&self) -> bool {
        self.map.to_grid(self.controller.committed().position) == self.map.goal()
    }

    // ── Mode control ──────────────────────────────────────────────────────

    pub fn is_agent_active(&self) -> bool {
        self.agent_active
    }

    /// Switch between decision-driven and manual (continuous drive) control.
    ///
    /// Activating clears the text history so the first prompt starts at step 1.
    pub fn set_agent_active(&mut self, active: bool) {
        if active && !self.agent_active {
            self.ascii.clear();
        }
        self.agent_active = active;
    }

    /// Held intents for manual mode.  Ignored while the agent is active.
    pub fn set_drive(&mut self, drive: DriveInput) {
        self.drive = drive;
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Advance one frame of `dt` seconds.
    ///
    /// # Errors
    ///
    /// [`SessionError::Ended`] once the session has ended.  Policy failures
    /// are not errors; they are reported to the observer and retried.
    pub fn step<O: SessionObserver>(&mut self, dt: f32, observer: &mut O) -> SessionResult<FrameReport> {
        if self.ended.is_some() {
            return Err(SessionError::Ended);
        }
        let frame = self.clock.current_frame;
        let mut report = FrameReport { frame, ..FrameReport::default() };

        // ── ① Tick the controller ─────────────────────────────────────────
        let drive = if self.agent_active { DriveInput::NONE } else { self.drive };
        let tick = self.controller.tick(dt, &drive, &self.map);
        report.drive_blocked = tick.drive_blocked;
        self.clock.advance(dt);

        // ── ② Sample the trail ────────────────────────────────────────────
        self.positions.sample(self.clock.elapsed_secs, self.controller.committed().position);

        // ── ③ Drain completions ───────────────────────────────────────────
        while let Some(done) = self.handle.try_completion()? {
            report.completions += 1;
            self.outstanding = None;
            observer.on_completion(frame, &done);
        }

        // ── ④ Decision cycle ──────────────────────────────────────────────
        if self.agent_active && self.outstanding.is_none() && self.controller.is_settled() {
            if self.config.max_cycles.is_some_and(|max| self.cycles >= max) {
                report.ended = Some(self.finish(frame, SessionEnd::CycleLimit, observer));
            } else {
                report.decided = true;
                report.submitted = self.decide(frame, observer)?;
                report.ended = self.ended;
            }
        }

        observer.on_frame(frame, self.clock.elapsed_secs, &self.controller.pose(), &self.controller.phase());
        Ok(report)
    }

    /// Step with `config.frame_secs` until the session ends or
    /// `config.max_frames` frames have run.
    pub fn run<O: SessionObserver>(&mut self, observer: &mut O) -> SessionResult<SessionEnd> {
        let dt = self.config.frame_secs;
        for _ in 0..self.config.max_frames {
            if let Some(end) = self.step(dt, observer)?.ended {
                return Ok(end);
            }
        }
        let frame = self.clock.current_frame;
        Ok(self.finish(frame, SessionEnd::FrameLimit, observer))
    }

    /// Return to the start cell facing the initial angle, clear breadcrumbs
    /// and histories, and discard pending work.
    pub fn restart(&mut self) {
        let start = AgentState::at_cell(self.map.start(), self.map.cell_size(), self.start_angle);
        self.controller.reset(start);
        let stale = self.handle.drain_completions();
        self.map.clear_visited();
        self.positions.clear();
        self.ascii.clear();
        self.clock.reset();
        self.policy.on_restart();
        self.outstanding = None;
        self.cycles      = 0;
        self.ended       = None;
        info!(stale, "session restarted");
    }

    /// Build the observation for the next decision without asking the
    /// policy.  In ASCII mode this marks the current cell visited; the map
    /// appears as the latest prompt entry but joins the text history only
    /// once a decision is accepted.
    pub fn observe(&mut self) -> SessionResult<Observation> {
        let lookahead = simulate_controller(&self.controller, &self.map)?;
        let state = self.controller.committed();

        let body = match self.config.observation {
            ObservationMode::Ascii => {
                let current = encode_ascii(&mut self.map, &state);
                let prompt  = self.ascii.prompt_with(&current);
                ObservationBody::Ascii { current, prompt }
            }
            ObservationMode::Schematic => {
                let trail = self.positions.points();
                let draw  = |s: &AgentState| self.schematic.encode(&self.map, s, trail);
                ObservationBody::Schematic {
                    current:    draw(&state),
                    forward:    draw(&lookahead.forward.state),
                    turn_left:  draw(&lookahead.turn_left.state),
                    turn_right: draw(&lookahead.turn_right.state),
                }
            }
        };

        Ok(Observation {
            frame: self.clock.current_frame,
            cycle: self.cycles + 1,
            state,
            lookahead,
            body,
        })
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn decide<O: SessionObserver>(&mut self, frame: Frame, observer: &mut O) -> SessionResult<Option<MotionAction>> {
        let observation = self.observe()?;
        let decision = match self.policy.decide(&observation) {
            Ok(d) => d,
            Err(e) => {
                warn!(%frame, cycle = observation.cycle, error = %e, "decision cycle failed; retrying");
                observer.on_policy_error(frame, &e);
                return Ok(None);
            }
        };

        self.cycles += 1;
        if let ObservationBody::Ascii { current, .. } = observation.body {
            self.ascii.push(current);
        }
        info!(
            %frame,
            cycle   = self.cycles,
            action  = %decision.action,
            thought = %decision.thought,
            "decision"
        );
        observer.on_decision(frame, self.cycles, &decision, &observation.lookahead);

        match self.handle.submit(decision.action)? {
            Submission::Queued(action) => {
                self.outstanding = Some(action);
                Ok(Some(action))
            }
            Submission::Stop => {
                self.finish(frame, SessionEnd::Stopped, observer);
                Ok(None)
            }
        }
    }

    fn finish<O: SessionObserver>(&mut self, frame: Frame, end: SessionEnd, observer: &mut O) -> SessionEnd {
        self.ended = Some(end);
        info!(%frame, ?end, cycles = self.cycles, at_goal = self.at_goal(), "session ended");
        observer.on_session_end(frame, end);
        debug!(visited = self.map.visited().len(), trail = self.positions.len(), "final state");
        end
    }
}
