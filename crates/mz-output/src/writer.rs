//! The `OutputWriter` trait implemented by backend writers.

use crate::{CompletionRow, DecisionRow, OutputResult, PoseRow};

/// Sink for session trace rows.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    fn write_pose(&mut self, row: &PoseRow) -> OutputResult<()>;

    fn write_decision(&mut self, row: &DecisionRow) -> OutputResult<()>;

    fn write_completion(&mut self, row: &CompletionRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
