//! `mz-session` — the decision loop around the navigation engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`config`]      | `SessionConfig`, `ObservationMode`                             |
//! | [`decision`]    | `Decision`, `parse_decision` (fenced-JSON tolerant)            |
//! | [`policy`]      | `DecisionPolicy` trait, `ScriptedPolicy`, `ResponsePolicy`, `RandomPolicy` |
//! | [`history`]     | `PositionHistory`: fixed-interval trail samples                |
//! | [`observation`] | `Observation`, `ObservationBody`                               |
//! | [`observer`]    | `SessionObserver` hooks, `NoopObserver`                        |
//! | [`builder`]     | `SessionBuilder`                                               |
//! | [`session`]     | `Session`, `SessionEnd`, `FrameReport`                         |
//! | [`error`]       | `SessionError`, `PolicyError`                                  |
//!
//! # Frame loop
//!
//! ```text
//! for each frame (dt seconds):
//!   ① Tick     : MotionController::tick (continuous drive only in manual mode)
//!   ② Sample   : PositionHistory records the committed position every 0.5 s
//!   ③ Drain    : completions from the ActionHandle clear the outstanding action
//!   ④ Decide   : if agent mode, settled, and nothing outstanding:
//!                   observe (encode + look ahead) → policy → submit
//!                   `stop` ends the session; a policy error is retried next frame
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mz_session::{NoopObserver, RandomPolicy, SessionBuilder, SessionConfig};
//!
//! let mut session = SessionBuilder::new(SessionConfig::default(), RandomPolicy::new(7)).build()?;
//! let end = session.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod decision;
pub mod error;
pub mod history;
pub mod observation;
pub mod observer;
pub mod policy;
pub mod session;


pub use builder::SessionBuilder;
pub use config::{ObservationMode, SessionConfig};
pub use decision::{Decision, parse_decision};
pub use error::{PolicyError, PolicyResult, SessionError, SessionResult};
pub use history::PositionHistory;
pub use observation::{Observation, ObservationBody};
pub use observer::{NoopObserver, SessionObserver};
pub use policy::{DecisionPolicy, RandomPolicy, ResponsePolicy, ScriptedPolicy};
pub use session::{FrameReport, Session, SessionEnd};
