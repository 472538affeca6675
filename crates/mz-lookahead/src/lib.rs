//! `mz-lookahead` — predict each action's outcome without committing it.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`outcome`]    | `Outcome`, `LookaheadSet`                             |
//! | [`simulate`]   | `simulate`, `simulate_controller`                     |
//! | [`error`]      | `LookaheadError`, `LookaheadResult<T>`                |
//!
//! Results are plain data.  Nothing here touches the controller's pose, the
//! visited set, or any renderer state; rendering a predicted pose is the
//! caller's business.

pub mod error;
pub mod outcome;
pub mod simulate;

#[cfg(test)]
mod tests;

pub use error::{LookaheadError, LookaheadResult};
pub use outcome::{LookaheadSet, Outcome};
pub use simulate::{simulate, simulate_controller};
