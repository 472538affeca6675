use mz_core::NavError;
use mz_grid::GridError;
use mz_lookahead::LookaheadError;
use mz_motion::MotionError;
use thiserror::Error;

/// A failed decision cycle.  Never fatal: the session logs it and asks again
/// on the next frame.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("malformed decision response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid action in decision: {0}")]
    Action(#[from] NavError),

    /// The decision service could not be reached or refused the request.
    #[error("decision service unavailable: {0}")]
    Unavailable(String),
}

pub type PolicyResult<T> = Result<T, PolicyError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Nav(#[from] NavError),

    #[error("layout error: {0}")]
    Grid(#[from] GridError),

    #[error("motion error: {0}")]
    Motion(#[from] MotionError),

    #[error("look-ahead error: {0}")]
    Lookahead(#[from] LookaheadError),

    /// `step` was called after the session ended; call `restart` first.
    #[error("session has already ended")]
    Ended,
}

pub type SessionResult<T> = Result<T, SessionError>;
