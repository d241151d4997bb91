//! Guest sequencing.
//!
//! Produces the order in which non-honor guests are offered to the
//! placement engine. Ordering is built from small scoring rules composed
//! by a [`RuleEngine`]:
//!
//! - Rules are applied in order; a later rule only breaks ties left by
//!   earlier rules.
//! - Sorting is stable, so fully tied guests keep their input order.
//!
//! Two branches exist. With family grouping enabled, guests are clustered
//! by normalized family name, clusters absorb out-of-family partners, and
//! clusters are emitted largest first. Otherwise guests are sorted flat:
//! exclusion-bearing guests first, then by role rank and age when those
//! criteria are enabled. Filler guests always come last.

mod engine;
mod rules;
mod sequencer;

pub use engine::RuleEngine;
pub use rules::{
    AgeAscending, Cluster, ExclusionBearingFirst, ExclusionFirst, LargestFirst, PriorityRule,
    RoleRank, SequenceContext,
};
pub use sequencer::sequence;
