use std::time::Duration;

use mz_core::NavError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error(transparent)]
    Nav(#[from] NavError),

    /// The controller side of the action channel was dropped.
    #[error("motion controller is gone")]
    ControllerGone,

    #[error("no completion within {0:?}")]
    Timeout(Duration),
}

pub type MotionResult<T> = Result<T, MotionError>;
