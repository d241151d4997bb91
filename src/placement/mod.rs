//! Placement engine and post-pass randomizer.
//!
//! Walks the sequenced guest list and seats each unit (a guest plus its
//! unplaced couple-group) with a tiered search:
//!
//! 1. the family's preferred table, when family grouping is on
//! 2. the first non-honor table with room and no exclusion conflict
//! 3. the first non-honor table with room, exclusions ignored (best effort)
//! 4. the honor table, only with room and no conflict
//!
//! Nothing here fails once validation has passed: soft-constraint breaks
//! and scarcity become [`Warning`]s. Every decision is recorded as a
//! [`PlacementEvent`] so a run can be audited afterwards.

mod engine;
mod shuffle;
mod types;

pub use engine::PlacementEngine;
pub use shuffle::shuffle_tables;
pub use types::{Decision, PlacementEvent, Stage, Warning, WarningKind};
