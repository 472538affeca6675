//! Schematic overhead view as drawing primitives.
//!
//! # Pixel space
//!
//! One cell is `scale` pixels square (60 by default), x to the right and y
//! down, so cell `(x, z)` covers `[x·s, x·s + s) × [z·s, z·s + s)`.  A
//! continuous position `p` maps to `p / cell_size · s + s / 2`, the centre of
//! the cell it rounds to when `p` sits on a cell centre.
//!
//! # Marker orientation
//!
//! The marker is an isosceles triangle pointing up at angle 0.  It is rotated
//! by `−angle` in pixel space: y grows downward there, so this keeps a left
//! turn (positive angle) pointing the tip toward −x, matching the text map.
//!
//! No rasterization happens here.

use mz_core::{AgentState, GridPos, Point};
use mz_grid::{GridMap, Terrain};

/// Default pixels per cell.
pub const DEFAULT_SCALE: f32 = 60.0;

/// Marker triangle in marker-local pixels (tip first), for the default scale.
const MARKER_VERTICES: [Vec2; 3] = [
    Vec2::new(0.0, -25.0),
    Vec2::new(18.0, 18.0),
    Vec2::new(-18.0, 18.0),
];

// ── Primitives ────────────────────────────────────────────────────────────────

/// A pixel-space point.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate about the origin by `angle` radians (clockwise on a y-down canvas).
    #[inline]
    pub fn rotated(self, angle: f32) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    pub fn approx_eq(self, other: Vec2, eps: f32) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Axis-aligned filled rectangle, top-left origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// The agent marker.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Marker {
    pub center:   Vec2,
    /// Rotation applied to the local triangle (the negated facing angle).
    pub rotation: f32,
    /// Triangle vertices in canvas pixels, tip first.
    pub vertices: [Vec2; 3],
}

/// Everything needed to draw one overhead frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Schematic {
    pub width:  f32,
    pub height: f32,
    /// One rectangle per wall cell, row-major.
    pub walls:  Vec<Rect>,
    pub start:  Rect,
    pub goal:   Rect,
    pub marker: Marker,
    /// Past positions in pixel space, oldest first.
    pub trail:  Vec<Vec2>,
}

// ── Encoder ───────────────────────────────────────────────────────────────────

/// Produces [`Schematic`]s for a given pixel scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SchematicEncoder {
    scale: f32,
}

impl Default for SchematicEncoder {
    fn default() -> Self {
        Self { scale: DEFAULT_SCALE }
    }
}

impl SchematicEncoder {
    /// Encoder with `scale` pixels per cell.  The marker shrinks or grows
    /// with the scale.
    pub fn with_scale(scale: f32) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Continuous position → pixel position.
    #[inline]
    pub fn to_pixels(&self, point: Point, cell_size: f32) -> Vec2 {
        let half = self.scale * 0.5;
        Vec2::new(
            point.x / cell_size * self.scale + half,
            point.z / cell_size * self.scale + half,
        )
    }

    /// Build the primitives for `state` over `map`, with `trail` drawn as
    /// past positions.  Reads the layout only; the visited set is ignored.
    pub fn encode(&self, map: &GridMap, state: &AgentState, trail: &[Point]) -> Schematic {
        let layout    = map.layout();
        let cell_size = layout.cell_size();
        let s         = self.scale;
        let cell_rect = |pos: GridPos| Rect {
            x: pos.x as f32 * s,
            y: pos.z as f32 * s,
            w: s,
            h: s,
        };

        let walls = layout
            .cells()
            .filter(|&(_, t)| t == Terrain::Wall)
            .map(|(pos, _)| cell_rect(pos))
            .collect();

        let center   = self.to_pixels(state.position, cell_size);
        let rotation = -state.angle;
        let k        = s / DEFAULT_SCALE;
        let vertices = MARKER_VERTICES.map(|v| center + Vec2::new(v.x * k, v.y * k).rotated(rotation));

        Schematic {
            width:  layout.width() as f32 * s,
            height: layout.height() as f32 * s,
            walls,
            start:  cell_rect(layout.start()),
            goal:   cell_rect(layout.goal()),
            marker: Marker { center, rotation, vertices },
            trail:  trail.iter().map(|&p| self.to_pixels(p, cell_size)).collect(),
        }
    }
}
