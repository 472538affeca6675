//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `poses.csv`
//! - `decisions.csv`
//! - `completions.csv`
//!
//! Booleans are written as `0`/`1`; an idle pose has an empty `action` field.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CompletionRow, DecisionRow, OutputResult, PoseRow};

pub const POSE_HEADER: [&str; 7] = ["frame", "elapsed_secs", "x", "z", "angle", "action", "progress"];
pub const DECISION_HEADER: [&str; 7] = [
    "frame",
    "cycle",
    "action",
    "thought",
    "forward_blocked",
    "turn_left_blocked",
    "turn_right_blocked",
];
pub const COMPLETION_HEADER: [&str; 7] = ["frame", "seq", "action", "blocked", "x", "z", "angle"];

/// Writes a session trace to three CSV files.
pub struct CsvWriter {
    poses:       Writer<File>,
    decisions:   Writer<File>,
    completions: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut poses = Writer::from_path(dir.join("poses.csv"))?;
        poses.write_record(POSE_HEADER)?;

        let mut decisions = Writer::from_path(dir.join("decisions.csv"))?;
        decisions.write_record(DECISION_HEADER)?;

        let mut completions = Writer::from_path(dir.join("completions.csv"))?;
        completions.write_record(COMPLETION_HEADER)?;

        Ok(Self {
            poses,
            decisions,
            completions,
            finished: false,
        })
    }
}

fn flag(b: bool) -> String {
    (b as u8).to_string()
}

impl OutputWriter for CsvWriter {
    fn write_pose(&mut self, row: &PoseRow) -> OutputResult<()> {
        self.poses.write_record(&[
            row.frame.to_string(),
            row.elapsed_secs.to_string(),
            row.x.to_string(),
            row.z.to_string(),
            row.angle.to_string(),
            row.action.map(|a| a.as_str()).unwrap_or_default().to_string(),
            row.progress.to_string(),
        ])?;
        Ok(())
    }

    fn write_decision(&mut self, row: &DecisionRow) -> OutputResult<()> {
        self.decisions.write_record(&[
            row.frame.to_string(),
            row.cycle.to_string(),
            row.action.to_string(),
            row.thought.clone(),
            flag(row.forward_blocked),
            flag(row.turn_left_blocked),
            flag(row.turn_right_blocked),
        ])?;
        Ok(())
    }

    fn write_completion(&mut self, row: &CompletionRow) -> OutputResult<()> {
        self.completions.write_record(&[
            row.frame.to_string(),
            row.seq.to_string(),
            row.action.as_str().to_string(),
            flag(row.blocked),
            row.x.to_string(),
            row.z.to_string(),
            row.angle.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.poses.flush()?;
        self.decisions.flush()?;
        self.completions.flush()?;
        Ok(())
    }
}
