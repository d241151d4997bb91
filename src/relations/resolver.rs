//! Couple graph and exclusion lookup.

use std::collections::{HashMap, HashSet};

use crate::model::{GuestId, SeatingProblem};

/// Relationship facts for one guest list.
///
/// Built once per run; all queries are pure.
///
/// # Examples
///
/// ```
/// use u_seating::model::{Couple, Exclusion, Guest, GuestId, SeatingProblem};
/// use u_seating::relations::Relations;
///
/// let problem = SeatingProblem::new((1..=3).map(|i| Guest::new(GuestId(i), "g")).collect())
///     .with_couple(Couple(GuestId(1), GuestId(2)))
///     .with_exclusion(Exclusion(GuestId(3), GuestId(1)));
/// let rel = Relations::new(&problem);
///
/// assert_eq!(rel.partner_of(GuestId(2)), Some(GuestId(1)));
/// assert!(rel.excludes(GuestId(1), GuestId(3)));
/// assert_eq!(rel.couple_groups(), vec![vec![GuestId(1), GuestId(2)]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Relations {
    /// Guest ids in input order.
    order: Vec<GuestId>,
    /// Couple adjacency, neighbours in declaration order.
    partners: HashMap<GuestId, Vec<GuestId>>,
    /// Exclusion pairs keyed in ascending id order.
    exclusions: HashSet<(GuestId, GuestId)>,
    /// Guests referenced by at least one exclusion.
    excluded: HashSet<GuestId>,
    /// Guests whose role seats them at the honor table.
    honor_seated: Vec<GuestId>,
}

impl Relations {
    /// Indexes the couples and exclusions of `problem`.
    ///
    /// Self-pairs are ignored.
    pub fn new(problem: &SeatingProblem) -> Self {
        let mut partners: HashMap<GuestId, Vec<GuestId>> = HashMap::new();
        for couple in &problem.couples {
            if couple.0 == couple.1 {
                continue;
            }
            let a = partners.entry(couple.0).or_default();
            if !a.contains(&couple.1) {
                a.push(couple.1);
            }
            let b = partners.entry(couple.1).or_default();
            if !b.contains(&couple.0) {
                b.push(couple.0);
            }
        }

        let mut exclusions = HashSet::new();
        let mut excluded = HashSet::new();
        for exclusion in &problem.exclusions {
            if exclusion.0 == exclusion.1 {
                continue;
            }
            exclusions.insert(exclusion.key());
            excluded.insert(exclusion.0);
            excluded.insert(exclusion.1);
        }

        Self {
            order: problem.guests.iter().map(|g| g.id).collect(),
            partners,
            exclusions,
            excluded,
            honor_seated: problem
                .guests
                .iter()
                .filter(|g| g.role.is_honor_seated())
                .map(|g| g.id)
                .collect(),
        }
    }

    /// The guest's mandatory partner, if any.
    ///
    /// For a chained couple-group this is the first declared partner.
    pub fn partner_of(&self, id: GuestId) -> Option<GuestId> {
        self.partners_of(id).first().copied()
    }

    /// All directly declared partners of a guest.
    pub fn partners_of(&self, id: GuestId) -> &[GuestId] {
        self.partners.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Symmetric exclusion lookup.
    pub fn excludes(&self, a: GuestId, b: GuestId) -> bool {
        let key = if a <= b { (a, b) } else { (b, a) };
        self.exclusions.contains(&key)
    }

    /// Whether the guest is referenced by any exclusion.
    pub fn has_exclusion(&self, id: GuestId) -> bool {
        self.excluded.contains(&id)
    }

    /// The couple-connected component containing `id`, starting with `id`.
    ///
    /// A guest without partners yields a single-element group.
    pub fn couple_group_of(&self, id: GuestId) -> Vec<GuestId> {
        let mut group = Vec::new();
        let mut seen = HashSet::new();
        self.collect_component(id, &mut seen, &mut group);
        group
    }

    /// Couple-connected groups of size two or more, in guest order.
    ///
    /// Depth-first over the couple graph. Partners that do not appear in
    /// the guest list are still reported as members.
    pub fn couple_groups(&self) -> Vec<Vec<GuestId>> {
        let mut seen = HashSet::new();
        let mut groups = Vec::new();

        for &id in &self.order {
            if seen.contains(&id) {
                continue;
            }
            let mut group = Vec::new();
            self.collect_component(id, &mut seen, &mut group);
            if group.len() >= 2 {
                groups.push(group);
            }
        }

        groups
    }

    /// Guests that must sit at the honor table, in input order: every
    /// honor-seated guest followed by its couple-group.
    pub fn honor_set(&self) -> Vec<GuestId> {
        let mut seen = HashSet::new();
        let mut set = Vec::new();
        for &id in &self.honor_seated {
            if !seen.contains(&id) {
                self.collect_component(id, &mut seen, &mut set);
            }
        }
        set
    }

    /// Every excluded pair with one member in `a` and the other in `b`.
    pub fn conflicts_between(
        &self,
        a: impl IntoIterator<Item = GuestId>,
        b: &[GuestId],
    ) -> Vec<(GuestId, GuestId)> {
        let mut pairs = Vec::new();
        for x in a {
            if !self.has_exclusion(x) {
                continue;
            }
            for &y in b {
                if self.excludes(x, y) {
                    pairs.push((x, y));
                }
            }
        }
        pairs
    }

    /// Every excluded pair inside `ids`.
    pub fn conflicts_within(&self, ids: &[GuestId]) -> Vec<(GuestId, GuestId)> {
        let mut pairs = Vec::new();
        for (i, &x) in ids.iter().enumerate() {
            for &y in &ids[i + 1..] {
                if self.excludes(x, y) {
                    pairs.push((x, y));
                }
            }
        }
        pairs
    }

    fn collect_component(
        &self,
        start: GuestId,
        seen: &mut HashSet<GuestId>,
        out: &mut Vec<GuestId>,
    ) {
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            out.push(id);
            // Reverse so the first declared partner is visited first.
            for &p in self.partners_of(id).iter().rev() {
                if !seen.contains(&p) {
                    stack.push(p);
                }
            }
        }
    }
}
