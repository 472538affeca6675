//! The `DecisionPolicy` trait, the seam where a decision service plugs in.

use mz_core::{Action, MotionAction, PolicyRng};

use crate::{Decision, Observation, PolicyResult, parse_decision};

/// Chooses the next action from an [`Observation`].
///
/// Only [`decide`][Self::decide] is required.  Implementations backed by a
/// remote service should map transport failures to
/// [`PolicyError::Unavailable`][crate::PolicyError::Unavailable]; the session
/// retries on the next frame.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysLeft;
///
/// impl DecisionPolicy for AlwaysLeft {
///     fn decide(&mut self, _obs: &Observation) -> PolicyResult<Decision> {
///         Ok(Decision::new("spin", Action::TurnLeft))
///     }
/// }
/// ```
pub trait DecisionPolicy {
    fn decide(&mut self, observation: &Observation) -> PolicyResult<Decision>;

    /// Called by [`Session::restart`][crate::Session::restart].
    fn on_restart(&mut self) {}
}

// ── ScriptedPolicy ────────────────────────────────────────────────────────────

/// Replays a fixed list of decisions, then answers `stop` forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPolicy {
    script: Vec<Decision>,
    cursor: usize,
}

impl ScriptedPolicy {
    pub fn new(script: Vec<Decision>) -> Self {
        Self { script, cursor: 0 }
    }

    /// A script with an empty `thought` for every step.
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        Self::new(actions.into_iter().map(|a| Decision::new("", a)).collect())
    }

    /// Decisions not yet replayed.
    pub fn remaining(&self) -> usize {
        self.script.len() - self.cursor
    }
}

impl DecisionPolicy for ScriptedPolicy {
    fn decide(&mut self, _observation: &Observation) -> PolicyResult<Decision> {
        match self.script.get(self.cursor) {
            Some(d) => {
                self.cursor += 1;
                Ok(d.clone())
            }
            None => Ok(Decision::new("script finished", Action::Stop)),
        }
    }

    fn on_restart(&mut self) {
        self.cursor = 0;
    }
}

// ── ResponsePolicy ────────────────────────────────────────────────────────────

/// Replays raw response bodies through [`parse_decision`], exactly as a
/// service reply would be handled.  Answers `stop` once exhausted.
///
/// A malformed body consumes its slot and fails that cycle.
#[derive(Clone, Debug, Default)]
pub struct ResponsePolicy {
    responses: Vec<String>,
    cursor:    usize,
}

impl ResponsePolicy {
    pub fn new<S: Into<String>>(responses: impl IntoIterator<Item = S>) -> Self {
        Self { responses: responses.into_iter().map(Into::into).collect(), cursor: 0 }
    }
}

impl DecisionPolicy for ResponsePolicy {
    fn decide(&mut self, _observation: &Observation) -> PolicyResult<Decision> {
        let Some(body) = self.responses.get(self.cursor) else {
            return Ok(Decision::new("responses exhausted", Action::Stop));
        };
        self.cursor += 1;
        parse_decision(body)
    }

    fn on_restart(&mut self) {
        self.cursor = 0;
    }
}

// ── RandomPolicy ──────────────────────────────────────────────────────────────

/// Offline stand-in for a decision service: a uniformly random motion action
/// every cycle.  Never answers `stop`.
pub struct RandomPolicy {
    seed: u64,
    rng:  PolicyRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self { seed, rng: PolicyRng::new(seed) }
    }
}

impl DecisionPolicy for RandomPolicy {
    fn decide(&mut self, _observation: &Observation) -> PolicyResult<Decision> {
        let action = self
            .rng
            .choose(&MotionAction::ALL)
            .copied()
            .unwrap_or(MotionAction::MoveForward);
        Ok(Decision::new("random exploration", action.into()))
    }

    /// Restarts replay the same sequence.
    fn on_restart(&mut self) {
        self.rng = PolicyRng::new(self.seed);
    }
}
