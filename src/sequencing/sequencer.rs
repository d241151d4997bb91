//! Placement order for non-honor guests.

use std::collections::{HashMap, HashSet};

use super::engine::RuleEngine;
use super::rules::{
    AgeAscending, Cluster, ExclusionBearingFirst, ExclusionFirst, LargestFirst, RoleRank,
    SequenceContext,
};
use crate::config::SortCriteria;
use crate::model::{Guest, GuestId};
use crate::relations::Relations;

/// Orders `guests` for placement.
///
/// Every guest appears exactly once in the output. Filler guests are
/// appended after all real guests in input order, whichever branch runs.
///
/// The flat branch only applies the criteria that are switched on. Family
/// names play no part there: grouping by family selects the cluster branch.
pub fn sequence(guests: &[Guest], relations: &Relations, criteria: &SortCriteria) -> Vec<GuestId> {
    let ctx = SequenceContext::new(guests, relations);
    let real: Vec<Guest> = guests.iter().filter(|g| !g.is_filler()).cloned().collect();

    let mut order = if criteria.by_family {
        family_order(&real, relations, &ctx)
    } else {
        flat_order(&real, criteria, &ctx)
    };

    order.extend(guests.iter().filter(|g| g.is_filler()).map(|g| g.id));
    order
}

fn flat_order(real: &[Guest], criteria: &SortCriteria, ctx: &SequenceContext) -> Vec<GuestId> {
    let engine = RuleEngine::new()
        .with_rule(ExclusionFirst)
        .with_rule_if(criteria.by_role, RoleRank)
        .with_rule_if(criteria.by_age, AgeAscending);

    tracing::debug!(rules = ?engine.rule_names(), guests = real.len(), "flat sequencing");

    engine.sort(real, ctx).into_iter().map(|g| g.id).collect()
}

fn family_order(real: &[Guest], relations: &Relations, ctx: &SequenceContext) -> Vec<GuestId> {
    let clusters = family_clusters(real, relations, ctx);

    let engine = RuleEngine::new()
        .with_rule(LargestFirst)
        .with_rule(ExclusionBearingFirst);

    tracing::debug!(clusters = clusters.len(), guests = real.len(), "family sequencing");

    let mut seen = HashSet::new();
    let mut order = Vec::with_capacity(real.len());
    for cluster in engine.sort(&clusters, ctx) {
        for &id in &cluster.members {
            if seen.insert(id) {
                order.push(id);
            }
        }
    }
    order
}

/// Clusters guests by family, then extends every cluster with partners
/// from outside the family.
///
/// Absorption runs only after all families are formed, so a member's
/// out-of-family partner never splits a family apart.
fn family_clusters(real: &[Guest], relations: &Relations, ctx: &SequenceContext) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut by_family: HashMap<String, usize> = HashMap::new();

    for guest in real {
        match guest.family_key() {
            Some(key) => match by_family.get(&key) {
                Some(&i) => clusters[i].members.push(guest.id),
                None => {
                    by_family.insert(key, clusters.len());
                    clusters.push(Cluster {
                        members: vec![guest.id],
                        has_exclusion: false,
                    });
                }
            },
            None => clusters.push(Cluster {
                members: vec![guest.id],
                has_exclusion: false,
            }),
        }
    }

    let eligible: HashSet<GuestId> = real.iter().map(|g| g.id).collect();

    for cluster in &mut clusters {
        let mut absorbed = Vec::new();
        for &member in &cluster.members {
            for id in relations.couple_group_of(member) {
                if eligible.contains(&id) && !cluster.members.contains(&id) && !absorbed.contains(&id)
                {
                    absorbed.push(id);
                }
            }
        }
        cluster.members.extend(absorbed);
        cluster.members.sort_by_key(|id| !ctx.excluded.contains(id));
        cluster.has_exclusion = cluster.members.iter().any(|id| ctx.excluded.contains(id));
    }

    clusters
}
