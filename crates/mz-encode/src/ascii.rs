//! Textual grid encoding.
//!
//! # Format
//!
//! ```text
//! Current Map:
//! # # # # # # # #
//! # G . . # . . #
//! ...
//! # . . . . . ^ #
//! # # # # # # # #
//!
//! [STATUS]: You are currently standing on the START point.
//! ```
//!
//! Every cell renders as its symbol followed by one space, and every row
//! ends in `\n`.  Precedence per cell: agent glyph, `S`, `G`, `#`, `o`
//! (visited), `.`.  The status line is only present when the agent stands
//! on the start or goal cell.

use tracing::trace;

use mz_core::{AgentState, GridPos};
use mz_grid::{CellKind, GridMap};

use crate::Compass;

const HEADER: &str = "Current Map:\n";

/// Marker cell the agent is standing on, if any.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Standing {
    Start,
    Goal,
}

impl Standing {
    fn status_line(self) -> &'static str {
        match self {
            Standing::Start => "\n[STATUS]: You are currently standing on the START point.",
            Standing::Goal  => "\n[STATUS]: You are currently standing on the GOAL point.",
        }
    }
}

/// Whether `cell` is the map's start or goal.
pub fn standing(map: &GridMap, cell: GridPos) -> Option<Standing> {
    if cell == map.start() {
        Some(Standing::Start)
    } else if cell == map.goal() {
        Some(Standing::Goal)
    } else {
        None
    }
}

/// Mark the agent's cell visited, then render.
pub fn encode_ascii(map: &mut GridMap, state: &AgentState) -> String {
    let cell = map.to_grid(state.position);
    if map.mark_visited(cell) {
        trace!(%cell, "breadcrumb");
    }
    render_ascii(map, state)
}

/// Render without touching the visited set.
pub fn render_ascii(map: &GridMap, state: &AgentState) -> String {
    let agent = map.to_grid(state.position);
    let glyph = Compass::from_angle(state.angle).glyph();

    let mut out = String::with_capacity(HEADER.len() + map.height() * (map.width() * 2 + 1) + 64);
    out.push_str(HEADER);
    for z in 0..map.height() as i32 {
        for x in 0..map.width() as i32 {
            let pos = GridPos::new(x, z);
            let symbol = if pos == agent {
                glyph
            } else {
                match standing(map, pos) {
                    Some(Standing::Start) => 'S',
                    Some(Standing::Goal)  => 'G',
                    None => match map.cell_at(pos) {
                        CellKind::Wall    => '#',
                        CellKind::Visited => 'o',
                        CellKind::Open    => '.',
                    },
                }
            };
            out.push(symbol);
            out.push(' ');
        }
        out.push('\n');
    }

    if let Some(s) = standing(map, agent) {
        out.push_str(s.status_line());
    }
    out
}
