//! `mz-output` — session trace writers for the maze navigation engine.
//!
//! The CSV backend creates three files in the output directory:
//!
//! | File              | One row per                                   |
//! |-------------------|-----------------------------------------------|
//! | `poses.csv`       | sampled frame (visible pose and motion phase) |
//! | `decisions.csv`   | accepted decision, with its look-ahead flags  |
//! | `completions.csv` | finished discrete action                      |
//!
//! Writers implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `mz_session::SessionObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mz_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer).with_pose_interval(6);
//! session.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{CompletionRow, DecisionRow, PoseRow};
pub use writer::OutputWriter;
