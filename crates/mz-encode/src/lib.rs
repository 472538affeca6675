//! `mz-encode` — turn the committed state into observations.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`compass`]   | `Compass`: four 90° heading sectors and their glyphs           |
//! | [`ascii`]     | `encode_ascii` (marks the breadcrumb), `render_ascii` (pure)   |
//! | [`history`]   | `AsciiHistory`: numbered multi-step prompt text                |
//! | [`schematic`] | `SchematicEncoder`, `Schematic` and its drawing primitives     |
//!
//! # Side effects
//!
//! [`encode_ascii`] is the only function in the engine that writes the
//! visited set: it marks the agent's cell before rendering so the trail of
//! `o` cells shows up in the very map it produces.  Everything else here is
//! pure.

pub mod ascii;
pub mod compass;
pub mod history;
pub mod schematic;


pub use ascii::{Standing, encode_ascii, render_ascii, standing};
pub use compass::Compass;
pub use history::AsciiHistory;
pub use schematic::{Marker, Rect, Schematic, SchematicEncoder, Vec2};
