//! Engine-wide error type.
//!
//! Sub-crates define their own error enums and wrap `NavError` as one variant
//! via `#[from]` where a core failure can surface through them.

use thiserror::Error;

/// The top-level error type for `mz-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NavError {
    /// A discrete action symbol outside `move_forward`, `turn_left`,
    /// `turn_right`, `stop`.
    #[error("unknown action {0:?}: expected move_forward, turn_left, turn_right, or stop")]
    UnknownAction(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `mz-*` crates.
pub type NavResult<T> = Result<T, NavError>;
