//! Session configuration.
//!
//! Deserialized from JSON by the demo binary; every field has a default so
//! an empty object `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

use mz_core::NavConfig;

use crate::{SessionError, SessionResult};

/// Which encoding the policy receives each cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationMode {
    /// Numbered text maps, one per cycle so far.
    #[default]
    Ascii,
    /// Overhead primitives for the current pose and each look-ahead outcome.
    Schematic,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub nav:         NavConfig,
    pub observation: ObservationMode,

    /// End the session after this many decisions.  `None` = unbounded.
    pub max_cycles:  Option<u32>,

    /// Fixed frame length used by [`Session::run`][crate::Session::run].
    pub frame_secs:  f32,

    /// Hard stop for [`Session::run`][crate::Session::run].
    pub max_frames:  u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            nav:         NavConfig::default(),
            observation: ObservationMode::default(),
            max_cycles:  None,
            frame_secs:  1.0 / 60.0,
            max_frames:  36_000,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> SessionResult<()> {
        self.nav.validate()?;
        if !(self.frame_secs.is_finite() && self.frame_secs > 0.0) {
            return Err(SessionError::Config(format!(
                "frame_secs must be positive, got {}",
                self.frame_secs
            )));
        }
        if self.max_frames == 0 {
            return Err(SessionError::Config("max_frames must be at least 1".into()));
        }
        Ok(())
    }
}
