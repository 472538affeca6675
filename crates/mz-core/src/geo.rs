//! Grid-space and continuous-space coordinates.
//!
//! `Point` uses `f32`.  Maze coordinates stay within a few dozen units of the
//! origin, where single precision is exact to well below a millimetre.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ── GridPos ──────────────────────────────────────────────────────────────────

/// Discrete cell index: column `x`, row `z`.
///
/// Signed so that neighbourhood arithmetic around border cells can step to
/// `-1` without wrapping; such coordinates are simply out of bounds.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub z: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The cell `(dx, dz)` steps away.  Saturates at the `i32` limits, which
    /// are far outside any layout.
    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> GridPos {
        GridPos::new(self.x.saturating_add(dx), self.z.saturating_add(dz))
    }

    /// Continuous-space centre of this cell.
    #[inline]
    pub fn center(self, cell_size: f32) -> Point {
        Point::new(self.x as f32 * cell_size, self.z as f32 * cell_size)
    }

    /// The 3×3 block of cells centred on `self`, row-major, `self` included.
    pub fn neighborhood(self) -> impl Iterator<Item = GridPos> {
        (-1..=1).flat_map(move |dz| (-1..=1).map(move |dx| self.offset(dx, dz)))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

// ── Point ─────────────────────────────────────────────────────────────────────

/// A continuous-space position on the maze floor.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub z: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Squared Euclidean distance.  Prefer this over [`distance`][Self::distance]
    /// for threshold comparisons.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx * dx + dz * dz
    }

    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Nearest grid cell: `round(continuous / cell_size)` on each axis.
    #[inline]
    pub fn to_grid(self, cell_size: f32) -> GridPos {
        GridPos::new(
            (self.x / cell_size).round() as i32,
            (self.z / cell_size).round() as i32,
        )
    }

    /// `true` if both coordinates are within `eps` of `other`'s.
    #[inline]
    pub fn approx_eq(self, other: Point, eps: f32) -> bool {
        (self.x - other.x).abs() <= eps && (self.z - other.z).abs() <= eps
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.z - rhs.z)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.z * rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.z)
    }
}
