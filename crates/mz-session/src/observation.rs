//! What a policy sees each decision cycle.

use mz_core::{AgentState, Frame};
use mz_encode::Schematic;
use mz_lookahead::LookaheadSet;

/// Encoded view for the active [`ObservationMode`][crate::ObservationMode].
#[derive(Clone, Debug, PartialEq)]
pub enum ObservationBody {
    Ascii {
        /// This cycle's map only.
        current: String,
        /// Every map so far, numbered; what a text policy is prompted with.
        prompt:  String,
    },
    /// Current pose plus one frame per look-ahead outcome, all drawn over the
    /// same trail.
    Schematic {
        current:    Schematic,
        forward:    Schematic,
        turn_left:  Schematic,
        turn_right: Schematic,
    },
}

/// Input to [`DecisionPolicy::decide`][crate::DecisionPolicy::decide].
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    pub frame:     Frame,
    /// 1-based decision cycle number.
    pub cycle:     u32,
    /// Committed pose the decision is made from.
    pub state:     AgentState,
    pub lookahead: LookaheadSet,
    pub body:      ObservationBody,
}

impl Observation {
    /// The text prompt, if this is an ASCII observation.
    pub fn prompt(&self) -> Option<&str> {
        match &self.body {
            ObservationBody::Ascii { prompt, .. } => Some(prompt),
            ObservationBody::Schematic { .. } => None,
        }
    }
}
