//! Seating data model.
//!
//! Guests, the pairwise relationships between them, and the tables they
//! are seated at. The placement core only reads guests; it never edits
//! names, ages or roles.
//!
//! # Key Components
//!
//! - [`Guest`], [`GuestId`], [`Role`]: the people being seated
//! - [`Couple`], [`Exclusion`]: "must share a table" / "should not share a table"
//! - [`Table`]: a bounded seating group; number 1 is the honor table
//! - [`SeatingProblem`]: the input bundle handed to the planner
//! - Filler helpers: synthetic guests padding the roster to a configured total

mod filler;
mod guest;
mod problem;
mod table;

pub use filler::{filler_name, is_auto_generated_filler_name, pad_roster, FILLER_PREFIX};
pub use guest::{Couple, Exclusion, Guest, GuestId, Role};
pub use problem::SeatingProblem;
pub use table::{Table, HONOR_TABLE_NUMBER};
