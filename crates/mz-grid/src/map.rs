//! `GridMap` — the read contract shared by every engine component.

use mz_core::{GridPos, Point};

use crate::{GridLayout, Terrain, VisitedSet, collision};

/// Observable kind of a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CellKind {
    Wall,
    Open,
    /// Open floor the agent has stood on during an encoding pass.
    Visited,
}

/// Immutable layout composed with a mutable visited set.
///
/// `cell_at` checks the visited set first and falls back to the layout.  The
/// only mutation is [`mark_visited`][Self::mark_visited] (plus the explicit
/// [`clear_visited`][Self::clear_visited] on restart).
#[derive(Clone, Debug)]
pub struct GridMap {
    layout:  GridLayout,
    visited: VisitedSet,
}

impl GridMap {
    pub fn new(layout: GridLayout) -> Self {
        Self { layout, visited: VisitedSet::new() }
    }

    /// [`GridLayout::reference`] with an empty visited set.
    pub fn reference() -> Self {
        Self::new(GridLayout::reference())
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    // ── Read contract ─────────────────────────────────────────────────────

    /// Kind of the cell at `pos`.  Out-of-bounds reads return `Wall`.
    pub fn cell_at(&self, pos: GridPos) -> CellKind {
        if self.visited.contains(pos) {
            return CellKind::Visited;
        }
        match self.layout.terrain(pos) {
            Terrain::Wall => CellKind::Wall,
            Terrain::Open => CellKind::Open,
        }
    }

    pub fn start(&self) -> GridPos {
        self.layout.start()
    }

    pub fn goal(&self) -> GridPos {
        self.layout.goal()
    }

    pub fn cell_size(&self) -> f32 {
        self.layout.cell_size()
    }

    pub fn width(&self) -> usize {
        self.layout.width()
    }

    pub fn height(&self) -> usize {
        self.layout.height()
    }

    #[inline]
    pub fn to_grid(&self, point: Point) -> GridPos {
        self.layout.to_grid(point)
    }

    #[inline]
    pub fn to_continuous(&self, pos: GridPos) -> Point {
        self.layout.to_continuous(pos)
    }

    /// Circle-vs-wall test against this map's layout.  See [`collision::collides`].
    #[inline]
    pub fn collides(&self, center: Point, radius: f32) -> bool {
        collision::collides(&self.layout, center, radius)
    }

    // ── Breadcrumbs ───────────────────────────────────────────────────────

    /// Transition `pos` from `Open` to `Visited`.
    ///
    /// No-op on walls, out-of-bounds cells, the start and goal cells, and
    /// already-visited cells.  Returns `true` only when the cell changed.
    pub fn mark_visited(&mut self, pos: GridPos) -> bool {
        if pos == self.layout.start() || pos == self.layout.goal() {
            return false;
        }
        if self.layout.terrain(pos) != Terrain::Open {
            return false;
        }
        self.visited.insert(pos)
    }

    /// Forget every breadcrumb.
    pub fn clear_visited(&mut self) {
        self.visited.clear();
    }
}
