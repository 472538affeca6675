//! Decision responses.
//!
//! The decision service answers with a JSON object
//! `{"thought": "...", "action": "move_forward"}`, often wrapped in a
//! Markdown code fence.  [`parse_decision`] strips the fences and validates
//! the action symbol.

use serde::{Deserialize, Serialize};

use mz_core::Action;

use crate::PolicyResult;

/// One answer from a [`DecisionPolicy`][crate::DecisionPolicy].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Free-form reasoning; logged, never interpreted.
    #[serde(default)]
    pub thought: String,
    pub action:  Action,
}

impl Decision {
    pub fn new(thought: impl Into<String>, action: Action) -> Self {
        Self { thought: thought.into(), action }
    }
}

/// Wire shape before the action symbol is checked, so an unknown symbol
/// reports as [`NavError::UnknownAction`][mz_core::NavError::UnknownAction]
/// rather than a generic JSON error.
#[derive(Deserialize)]
struct RawDecision {
    #[serde(default)]
    thought: String,
    action:  String,
}

/// Parse a decision-service response body.
pub fn parse_decision(body: &str) -> PolicyResult<Decision> {
    let cleaned = body.replace("```json", "").replace("```", "");
    let raw: RawDecision = serde_json::from_str(cleaned.trim())?;
    let action: Action = raw.action.parse()?;
    Ok(Decision { thought: raw.thought, action })
}
