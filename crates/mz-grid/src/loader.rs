//! CSV layout loader.
//!
//! # CSV format
//!
//! One maze row per CSV record, no header, `1` = wall and `0` = open:
//!
//! ```csv
//! 1,1,1,1,1
//! 1,0,0,0,1
//! 1,0,1,0,1
//! 1,1,1,1,1
//! ```
//!
//! Start and goal are not encoded in the numeric form; the caller supplies
//! them.  Fields are trimmed, so `1, 0, 1` is accepted.  Row lengths are
//! checked here rather than by the CSV reader so that a ragged file reports
//! [`GridError::Ragged`] with the offending row.

use std::io::Read;
use std::path::Path;

use mz_core::GridPos;

use crate::{GridError, GridLayout, GridResult, Terrain};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a layout from a numeric CSV file.
pub fn load_layout_csv(
    path:      &Path,
    start:     GridPos,
    goal:      GridPos,
    cell_size: f32,
) -> GridResult<GridLayout> {
    let file = std::fs::File::open(path)?;
    load_layout_reader(file, start, goal, cell_size)
}

/// Like [`load_layout_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_layout_reader<R: Read>(
    reader:    R,
    start:     GridPos,
    goal:      GridPos,
    cell_size: f32,
) -> GridResult<GridLayout> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<Terrain>> = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        if let Some(first) = rows.first() {
            if record.len() != first.len() {
                return Err(GridError::Ragged { row, expected: first.len(), got: record.len() });
            }
        }
        let cells = record
            .iter()
            .enumerate()
            .map(|(col, field)| parse_terrain(field, row, col))
            .collect::<GridResult<Vec<_>>>()?;
        rows.push(cells);
    }

    GridLayout::new(rows, start, goal, cell_size)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_terrain(field: &str, row: usize, col: usize) -> GridResult<Terrain> {
    match field {
        "1" => Ok(Terrain::Wall),
        "0" => Ok(Terrain::Open),
        other => Err(GridError::UnknownSymbol { symbol: other.to_string(), row, col }),
    }
}
