//! `VisitedSet` — the breadcrumb layer.
//!
//! Kept apart from [`GridLayout`][crate::GridLayout] so the static maze and
//! the runtime trail can be tested and reset independently.

use mz_core::GridPos;

#[cfg(feature = "fx-hash")]
type CellSet = rustc_hash::FxHashSet<GridPos>;

#[cfg(not(feature = "fx-hash"))]
type CellSet = std::collections::HashSet<GridPos>;

/// Set of cells the agent has been observed standing on.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    cells: CellSet,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pos`.  Returns `true` if it was not already present.
    pub fn insert(&mut self, pos: GridPos) -> bool {
        self.cells.insert(pos)
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        self.cells.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Visited cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.cells.iter().copied()
    }
}
