//! Circle vs. axis-aligned wall-square collision.
//!
//! The agent is a circle of radius `r`; every wall cell is a square of edge
//! `cell_size` centred on its grid point.  For each wall square in the 3×3
//! neighbourhood of the candidate's cell, clamp the candidate centre onto the
//! square to get the closest point, and report a hit when that point lies
//! strictly closer than `r`.
//!
//! Checking only the 3×3 window is exact while `r < cell_size / 2`
//! ([`NavConfig::validate`][mz_core::NavConfig::validate] enforces this); the
//! function itself does not re-check.

use mz_core::Point;

use crate::GridLayout;

/// `true` if a circle at `center` with `radius` overlaps any wall cell.
///
/// Out-of-bounds cells count as walls, so a centre outside the layout (or a
/// non-finite one) always collides.  Returns on the first hit.
pub fn collides(layout: &GridLayout, center: Point, radius: f32) -> bool {
    let cell_size = layout.cell_size();
    let half      = cell_size * 0.5;
    let radius_sq = radius * radius;

    if !(center.x.is_finite() && center.z.is_finite()) {
        return true;
    }
    // Far-away centres saturate in `to_grid`; their own cell is off the map.
    let cell = layout.to_grid(center);
    if !layout.in_bounds(cell) {
        return true;
    }

    cell
        .neighborhood()
        .filter(|&cell| layout.is_wall(cell))
        .any(|cell| {
            let c = cell.center(cell_size);
            let closest = Point::new(
                center.x.clamp(c.x - half, c.x + half),
                center.z.clamp(c.z - half, c.z + half),
            );
            center.distance_sq(closest) < radius_sq
        })
}
