//! Priority rules for guests and family clusters.

use std::collections::HashSet;

use crate::model::{Guest, GuestId};
use crate::relations::Relations;

/// A scoring rule that assigns a priority value to an item.
///
/// Rules return `f64` scores where **lower is higher priority**.
/// `f64::INFINITY` pushes an item behind every finite score.
///
/// # Type Parameters
///
/// * `T` - The item type being scored
/// * `C` - The context type providing state information
pub trait PriorityRule<T, C>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for the given item.
    ///
    /// Lower scores indicate higher priority.
    fn score(&self, item: &T, context: &C) -> f64;
}

/// Facts the rules need about the guest list as a whole.
#[derive(Debug, Clone, Default)]
pub struct SequenceContext {
    /// Guests referenced by at least one exclusion.
    pub excluded: HashSet<GuestId>,
}

impl SequenceContext {
    /// Builds the context for `guests`.
    pub fn new(guests: &[Guest], relations: &Relations) -> Self {
        Self {
            excluded: guests
                .iter()
                .map(|g| g.id)
                .filter(|&id| relations.has_exclusion(id))
                .collect(),
        }
    }
}

/// A family cluster awaiting placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Members in emission order, absorbed partners included.
    pub members: Vec<GuestId>,
    /// Whether any member is referenced by an exclusion.
    pub has_exclusion: bool,
}

// ---- Guest rules ----

/// Exclusion-bearing guests before everyone else.
pub struct ExclusionFirst;

impl PriorityRule<Guest, SequenceContext> for ExclusionFirst {
    fn name(&self) -> &str {
        "ExclusionFirst"
    }

    fn score(&self, guest: &Guest, ctx: &SequenceContext) -> f64 {
        if ctx.excluded.contains(&guest.id) {
            0.0
        } else {
            1.0
        }
    }
}

/// Honoree, witness, attendants, then regular guests.
pub struct RoleRank;

impl PriorityRule<Guest, SequenceContext> for RoleRank {
    fn name(&self) -> &str {
        "RoleRank"
    }

    fn score(&self, guest: &Guest, _ctx: &SequenceContext) -> f64 {
        f64::from(guest.role.rank())
    }
}

/// Youngest first. Guests without an age go last.
pub struct AgeAscending;

impl PriorityRule<Guest, SequenceContext> for AgeAscending {
    fn name(&self) -> &str {
        "AgeAscending"
    }

    fn score(&self, guest: &Guest, _ctx: &SequenceContext) -> f64 {
        guest.age.map_or(f64::INFINITY, f64::from)
    }
}

// ---- Cluster rules ----

/// Larger clusters first.
pub struct LargestFirst;

impl PriorityRule<Cluster, SequenceContext> for LargestFirst {
    fn name(&self) -> &str {
        "LargestFirst"
    }

    fn score(&self, cluster: &Cluster, _ctx: &SequenceContext) -> f64 {
        -(cluster.members.len() as f64)
    }
}

/// Clusters holding an exclusion-bearing guest first.
pub struct ExclusionBearingFirst;

impl PriorityRule<Cluster, SequenceContext> for ExclusionBearingFirst {
    fn name(&self) -> &str {
        "ExclusionBearingFirst"
    }

    fn score(&self, cluster: &Cluster, _ctx: &SequenceContext) -> f64 {
        if cluster.has_exclusion {
            0.0
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Exclusion, Role, SeatingProblem};

    #[test]
    fn test_exclusion_first_scores() {
        let guests = vec![Guest::new(GuestId(1), "a"), Guest::new(GuestId(2), "b")];
        let problem = SeatingProblem::new(guests.clone())
            .with_exclusion(Exclusion(GuestId(2), GuestId(7)));
        let ctx = SequenceContext::new(&guests, &Relations::new(&problem));

        assert_eq!(ExclusionFirst.score(&guests[1], &ctx), 0.0);
        assert_eq!(ExclusionFirst.score(&guests[0], &ctx), 1.0);
    }

    #[test]
    fn test_role_and_age_scores() {
        let ctx = SequenceContext::default();
        let witness = Guest::new(GuestId(1), "w").with_role(Role::Witness);
        let kid = Guest::new(GuestId(2), "k").with_age(6);

        assert!(RoleRank.score(&witness, &ctx) < RoleRank.score(&kid, &ctx));
        assert_eq!(AgeAscending.score(&kid, &ctx), 6.0);
        assert!(AgeAscending.score(&witness, &ctx).is_infinite());
    }

    #[test]
    fn test_cluster_rules() {
        let ctx = SequenceContext::default();
        let big = Cluster {
            members: vec![GuestId(1), GuestId(2), GuestId(3)],
            has_exclusion: false,
        };
        let small = Cluster {
            members: vec![GuestId(4)],
            has_exclusion: true,
        };

        assert!(LargestFirst.score(&big, &ctx) < LargestFirst.score(&small, &ctx));
        assert!(
            ExclusionBearingFirst.score(&small, &ctx) < ExclusionBearingFirst.score(&big, &ctx)
        );
    }
}
