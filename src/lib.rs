//! Constraint-based table assignment.
//!
//! Seats guests at a fixed set of tables subject to hard and soft
//! constraints:
//!
//! - **Honor seating**: honorees and witnesses, plus their partners, always
//!   sit at table 1.
//! - **Couples**: partners always share a table.
//! - **Exclusions**: guests who should not share a table are kept apart
//!   whenever any conflict-free table has room.
//! - **Family grouping**: optionally, members of a family prefer the table
//!   their family first landed at.
//!
//! Placement is a greedy heuristic, not a solver. When soft constraints
//! cannot be met it degrades to a best-effort seating and reports every
//! compromise as a warning; only structurally impossible inputs fail.
//!
//! # Architecture
//!
//! - [`relations`]: couple graph and exclusion lookup
//! - [`feasibility`]: gatekeeping checks run before any placement
//! - [`sequencing`]: placement order from composable priority rules
//! - [`placement`]: tiered placement loop and post-pass shuffle
//! - [`planner`]: the `validate` / `generate` entry points
//! - [`edit`], [`export`]: consumers of a finished seating
//!
//! # Examples
//!
//! ```
//! use u_seating::config::{SeatingConfig, SortCriteria};
//! use u_seating::model::{Couple, Exclusion, Guest, GuestId, SeatingProblem};
//! use u_seating::planner::SeatingPlanner;
//!
//! let problem = SeatingProblem::new(vec![
//!     Guest::new(GuestId(1), "Ana"),
//!     Guest::new(GuestId(2), "Ben"),
//!     Guest::new(GuestId(3), "Cy"),
//!     Guest::new(GuestId(4), "Di"),
//! ])
//! .with_couple(Couple(GuestId(1), GuestId(2)))
//! .with_exclusion(Exclusion(GuestId(1), GuestId(3)));
//!
//! let config = SeatingConfig::default()
//!     .with_table_count(2)
//!     .with_seats_per_table(2)
//!     .with_honor_table_seats(2)
//!     .with_criteria(SortCriteria::default().with_by_family(true));
//!
//! let result = SeatingPlanner::run(&problem, &config);
//! assert!(result.success);
//! assert_eq!(result.table_of(GuestId(1)), result.table_of(GuestId(2)));
//! assert_ne!(result.table_of(GuestId(1)), result.table_of(GuestId(3)));
//! ```

pub mod config;
pub mod edit;
pub mod error;
pub mod export;
pub mod feasibility;
pub mod model;
pub mod placement;
pub mod planner;
pub mod relations;
pub mod sequencing;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{ConfigError, ExportError, FeasibilityError, MoveError};
pub use model::is_auto_generated_filler_name;
pub use planner::{SeatingPlanner, SeatingResult};
