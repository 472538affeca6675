//! `mz-core` — foundational types for the maze navigation engine.
//!
//! This crate is a dependency of every other `mz-*` crate.  It has no `mz-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GridPos` (grid-space), `Point` (continuous-space)    |
//! | [`pose`]        | `AgentState`, angle normalization                     |
//! | [`action`]      | `Action` (decision vocabulary), `MotionAction`        |
//! | [`config`]      | `NavConfig` and the reference constants               |
//! | [`time`]        | `Frame`, `FrameClock`                                 |
//! | [`rng`]         | `PolicyRng` (seeded, for mock policies)               |
//! | [`error`]       | `NavError`, `NavResult`                               |
//!
//! # Coordinate conventions
//!
//! Grid-space cell `(x, z)` has its centre at continuous `(x * edge, z * edge)`.
//! Facing angle `0` looks along −z ("north", up on every map view) and a
//! positive angle turns left.  Angles are never normalized in storage; use
//! [`pose::normalize_angle`] where a canonical value is needed.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod action;
pub mod config;
pub mod error;
pub mod geo;
pub mod pose;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::{Action, MotionAction};
pub use config::NavConfig;
pub use error::{NavError, NavResult};
pub use geo::{GridPos, Point};
pub use pose::{AgentState, normalize_angle};
pub use rng::PolicyRng;
pub use time::{Frame, FrameClock};
