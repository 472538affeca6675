//! `mz-grid` — the static maze, its breadcrumb layer, and collision queries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`layout`]    | `GridLayout` (immutable table), `Terrain`, reference maze    |
//! | [`visited`]   | `VisitedSet`: coordinates the agent has stood on             |
//! | [`map`]       | `GridMap`: layout + visited behind one read contract         |
//! | [`collision`] | `collides`: circle vs. axis-aligned wall squares             |
//! | [`loader`]    | `load_layout_csv`, `load_layout_reader` (numeric 0/1 form)   |
//! | [`error`]     | `GridError`, `GridResult<T>`                                 |
//!
//! # Closed world
//!
//! Every read outside the grid behaves as a wall.  Callers never need to
//! bounds-check before calling [`GridMap::cell_at`] or [`collides`].
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Backs `VisitedSet` with `FxHashSet` instead of `HashSet`.  |

pub mod collision;
pub mod error;
pub mod layout;
pub mod loader;
pub mod map;
pub mod visited;


pub use collision::collides;
pub use error::{GridError, GridResult};
pub use layout::{GridLayout, Terrain};
pub use loader::{load_layout_csv, load_layout_reader};
pub use map::{CellKind, GridMap};
pub use visited::VisitedSet;
