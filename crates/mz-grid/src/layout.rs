//! The immutable maze table.
//!
//! # Data layout
//!
//! Cells are stored row-major in a single `Vec<Terrain>`: cell `(x, z)` lives
//! at `z * width + x`.  Rows run top to bottom (−z is "north"), columns left
//! to right.
//!
//! # Text form
//!
//! [`GridLayout::parse`] reads one row per line:
//!
//! | Symbol | Meaning                   |
//! |--------|---------------------------|
//! | `#`    | wall                      |
//! | `.`    | open floor                |
//! | `S`    | open floor, start cell    |
//! | `G`    | open floor, goal cell     |
//!
//! Whitespace inside a row is ignored, so both `#.#` and `# . #` parse.
//! Blank lines are skipped.

use mz_core::config::CELL_SIZE;
use mz_core::{GridPos, Point};

use crate::{GridError, GridResult};

/// Static kind of a layout cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Terrain {
    Wall,
    Open,
}

/// Reference maze: 8 columns × 7 rows, `1` = wall.
const REFERENCE_ROWS: [[u8; 8]; 7] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 1, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 1],
    [1, 0, 1, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];
const REFERENCE_START: GridPos = GridPos::new(6, 5);
const REFERENCE_GOAL:  GridPos = GridPos::new(1, 1);

/// Rectangular maze with fixed start and goal cells.
///
/// Immutable after construction.  Breadcrumb state lives in
/// [`VisitedSet`][crate::VisitedSet], never here.
#[derive(Clone, Debug)]
pub struct GridLayout {
    width:     usize,
    height:    usize,
    cells:     Vec<Terrain>,
    start:     GridPos,
    goal:      GridPos,
    cell_size: f32,
}

impl GridLayout {
    /// Build a layout from rows of terrain.
    ///
    /// # Errors
    ///
    /// Fails if `rows` is empty or ragged, if `cell_size` is not a positive
    /// finite number, or if `start`/`goal` are out of bounds, on a wall, or
    /// the same cell.
    pub fn new(
        rows:      Vec<Vec<Terrain>>,
        start:     GridPos,
        goal:      GridPos,
        cell_size: f32,
    ) -> GridResult<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::CellSize(cell_size));
        }
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(GridError::Ragged { row, expected: width, got: cols.len() });
            }
            cells.extend(cols);
        }

        let layout = Self { width, height, cells, start, goal, cell_size };
        layout.check_marker("start", start)?;
        layout.check_marker("goal", goal)?;
        if start == goal {
            return Err(GridError::BadMarker { what: "goal", pos: goal, reason: "the start cell" });
        }
        Ok(layout)
    }

    /// Parse the text form described in the module docs.
    pub fn parse(text: &str, cell_size: f32) -> GridResult<Self> {
        let mut rows   = Vec::new();
        let mut starts = Vec::new();
        let mut goals  = Vec::new();

        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let z = rows.len();
            let mut row = Vec::new();
            for (x, ch) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let terrain = match ch {
                    '#' => Terrain::Wall,
                    '.' => Terrain::Open,
                    'S' => {
                        starts.push(GridPos::new(x as i32, z as i32));
                        Terrain::Open
                    }
                    'G' => {
                        goals.push(GridPos::new(x as i32, z as i32));
                        Terrain::Open
                    }
                    other => {
                        return Err(GridError::UnknownSymbol {
                            symbol: other.to_string(),
                            row:    z,
                            col:    x,
                        });
                    }
                };
                row.push(terrain);
            }
            rows.push(row);
        }

        let start = single_marker("start", &starts)?;
        let goal  = single_marker("goal", &goals)?;
        Self::new(rows, start, goal, cell_size)
    }

    /// The 8 × 7 reference maze with start `(6, 5)`, goal `(1, 1)` and cell
    /// edge length 2.
    pub fn reference() -> Self {
        let cells = REFERENCE_ROWS
            .iter()
            .flat_map(|row| row.iter())
            .map(|&bit| if bit == 1 { Terrain::Wall } else { Terrain::Open })
            .collect();
        Self {
            width:     REFERENCE_ROWS[0].len(),
            height:    REFERENCE_ROWS.len(),
            cells,
            start:     REFERENCE_START,
            goal:      REFERENCE_GOAL,
            cell_size: CELL_SIZE,
        }
    }

    // ── Dimensions & markers ──────────────────────────────────────────────

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> GridPos {
        self.start
    }

    pub fn goal(&self) -> GridPos {
        self.goal
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    // ── Cell access ───────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.z >= 0 && (pos.x as usize) < self.width && (pos.z as usize) < self.height
    }

    /// Terrain at `pos`; `Wall` for any out-of-bounds coordinate.
    #[inline]
    pub fn terrain(&self, pos: GridPos) -> Terrain {
        if !self.in_bounds(pos) {
            return Terrain::Wall;
        }
        self.cells[pos.z as usize * self.width + pos.x as usize]
    }

    #[inline]
    pub fn is_wall(&self, pos: GridPos) -> bool {
        self.terrain(pos) == Terrain::Wall
    }

    /// All in-bounds cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, Terrain)> + '_ {
        self.cells.iter().enumerate().map(|(i, &t)| {
            (GridPos::new((i % self.width) as i32, (i / self.width) as i32), t)
        })
    }

    // ── Space conversion ──────────────────────────────────────────────────

    /// Continuous → grid: `round(continuous / cell_size)`.
    #[inline]
    pub fn to_grid(&self, point: Point) -> GridPos {
        point.to_grid(self.cell_size)
    }

    /// Grid → continuous (cell centre).
    #[inline]
    pub fn to_continuous(&self, pos: GridPos) -> Point {
        pos.center(self.cell_size)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn check_marker(&self, what: &'static str, pos: GridPos) -> GridResult<()> {
        if !self.in_bounds(pos) {
            return Err(GridError::BadMarker { what, pos, reason: "out of bounds" });
        }
        if self.is_wall(pos) {
            return Err(GridError::BadMarker { what, pos, reason: "a wall" });
        }
        Ok(())
    }
}

fn single_marker(what: &'static str, found: &[GridPos]) -> GridResult<GridPos> {
    match found {
        [pos] => Ok(*pos),
        _ => Err(GridError::MarkerCount { what, count: found.len() }),
    }
}
