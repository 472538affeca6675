//! Heading sectors.

use std::f32::consts::FRAC_PI_4;
use std::fmt;

use mz_core::normalize_angle;

/// The four map directions, each covering a 90° sector centred on its axis.
///
/// Sector boundaries sit at odd multiples of 45°; a boundary angle belongs to
/// the sector counter-clockwise of it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Compass {
    /// −z, up on every map.  Angle 0.
    North,
    /// −x.  Angle π/2.
    West,
    /// +z.  Angle π.
    South,
    /// +x.  Angle 3π/2.
    East,
}

impl Compass {
    /// Sector containing `angle` after normalization into `[0, 2π)`.
    pub fn from_angle(angle: f32) -> Self {
        let r = normalize_angle(angle);
        if r < FRAC_PI_4 || r >= 7.0 * FRAC_PI_4 {
            Compass::North
        } else if r < 3.0 * FRAC_PI_4 {
            Compass::West
        } else if r < 5.0 * FRAC_PI_4 {
            Compass::South
        } else {
            Compass::East
        }
    }

    /// Text-map glyph: `^`, `<`, `v` or `>`.
    pub fn glyph(self) -> char {
        match self {
            Compass::North => '^',
            Compass::West  => '<',
            Compass::South => 'v',
            Compass::East  => '>',
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compass::North => "north",
            Compass::West  => "west",
            Compass::South => "south",
            Compass::East  => "east",
        };
        f.write_str(name)
    }
}
