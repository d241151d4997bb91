//! Post-generation edits.
//!
//! Once a [`SeatingResult`](crate::planner::SeatingResult) is handed off,
//! the surrounding application edits its own copy of the tables. These
//! helpers perform those edits and re-derive advisories for whatever state
//! the tables end up in. The planner is never re-invoked.

mod advisories;
mod moves;

pub use advisories::advisories;
pub use moves::{move_guest, rename_table};
