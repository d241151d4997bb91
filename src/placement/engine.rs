//! Tiered placement loop.

use std::collections::{HashMap, HashSet};

use super::types::{Decision, PlacementEvent, Stage, Warning, WarningKind};
use crate::model::{Guest, GuestId, SeatingProblem, Table};
use crate::relations::Relations;

/// Seats guests at a fixed set of tables.
///
/// One engine serves one generation run. The family→table map, the
/// placed/attempted sets, warnings and the trace live here and are
/// dropped with the engine.
pub struct PlacementEngine<'a> {
    guests: HashMap<GuestId, &'a Guest>,
    problem: &'a SeatingProblem,
    relations: &'a Relations,
    by_family: bool,
    /// Normalized family name -> index of the first non-honor table it landed at.
    family_tables: HashMap<String, usize>,
    placed: HashSet<GuestId>,
    /// Guests already offered in some unit. Units are never retried.
    attempted: HashSet<GuestId>,
    warnings: Vec<Warning>,
    trace: Vec<PlacementEvent>,
}

impl<'a> PlacementEngine<'a> {
    /// Creates an engine for one run.
    pub fn new(problem: &'a SeatingProblem, relations: &'a Relations, by_family: bool) -> Self {
        Self {
            guests: problem.guests.iter().map(|g| (g.id, g)).collect(),
            problem,
            relations,
            by_family,
            family_tables: HashMap::new(),
            placed: HashSet::new(),
            attempted: HashSet::new(),
            warnings: Vec::new(),
            trace: Vec::new(),
        }
    }

    /// Seats the mandatory honor guests at the honor table.
    ///
    /// Capacity was checked by validation. Exclusions among honor guests
    /// cannot be avoided and are reported.
    pub fn seat_honor_guests(&mut self, tables: &mut [Table], honor_set: &[GuestId]) {
        let Some(honor) = tables.iter().position(Table::is_honor) else {
            return;
        };
        let unit: Vec<GuestId> = honor_set
            .iter()
            .copied()
            .filter(|id| self.guests.contains_key(id) && !self.placed.contains(id))
            .collect();
        if unit.is_empty() {
            return;
        }

        self.attempted.extend(unit.iter().copied());
        self.seat(tables, honor, &unit);
        self.record(&unit, Stage::HonorSeating, Some(tables[honor].number), Decision::Placed);

        for (a, b) in self.relations.conflicts_within(&unit) {
            self.warn_exclusion(a, b, tables[honor].number);
        }
    }

    /// Offers every guest in `order` to the tiered search.
    pub fn place_all(&mut self, tables: &mut [Table], order: &[GuestId]) {
        for &id in order {
            self.place_unit(tables, id);
        }
    }

    /// Places `leader` together with its unplaced couple-group.
    ///
    /// Does nothing if the guest was already placed or already offered.
    pub fn place_unit(&mut self, tables: &mut [Table], leader: GuestId) {
        if self.placed.contains(&leader) || self.attempted.contains(&leader) {
            return;
        }
        let unit: Vec<GuestId> = self
            .relations
            .couple_group_of(leader)
            .into_iter()
            .filter(|id| {
                self.guests.contains_key(id)
                    && !self.placed.contains(id)
                    && !self.attempted.contains(id)
            })
            .collect();
        if unit.is_empty() {
            return;
        }
        self.attempted.extend(unit.iter().copied());

        if let Some(t) = self.try_preferred(tables, &unit) {
            self.commit(tables, t, &unit);
            return;
        }

        // First table with room and no conflict.
        let conflict_free = (0..tables.len())
            .filter(|&t| !tables[t].is_honor())
            .find(|&t| self.check(&tables[t], &unit) == Decision::Placed);
        if let Some(t) = conflict_free {
            self.record(&unit, Stage::ConflictFree, Some(tables[t].number), Decision::Placed);
            self.commit(tables, t, &unit);
            return;
        }
        self.record(&unit, Stage::ConflictFree, None, Decision::NoCandidate);

        // Best effort: room only.
        let best_effort = (0..tables.len())
            .filter(|&t| !tables[t].is_honor())
            .find(|&t| tables[t].remaining() >= unit.len());
        if let Some(t) = best_effort {
            let seated: Vec<GuestId> = tables[t].guest_ids().collect();
            let number = tables[t].number;
            for (a, b) in self.relations.conflicts_between(unit.iter().copied(), &seated) {
                self.warn_exclusion(a, b, number);
            }
            self.record(&unit, Stage::BestEffort, Some(number), Decision::Placed);
            self.commit(tables, t, &unit);
            return;
        }
        self.record(&unit, Stage::BestEffort, None, Decision::NoCandidate);

        self.try_honor_fallback(tables, &unit);
    }

    /// Warnings recorded so far.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Decision trace recorded so far.
    pub fn trace(&self) -> &[PlacementEvent] {
        &self.trace
    }

    /// Whether the guest has been seated.
    pub fn is_placed(&self, id: GuestId) -> bool {
        self.placed.contains(&id)
    }

    /// Consumes the engine, returning its warnings and trace.
    pub fn finish(self) -> (Vec<Warning>, Vec<PlacementEvent>) {
        (self.warnings, self.trace)
    }

    fn try_preferred(&mut self, tables: &[Table], unit: &[GuestId]) -> Option<usize> {
        if !self.by_family {
            return None;
        }
        let t = unit
            .iter()
            .filter_map(|id| self.guests[id].family_key())
            .find_map(|key| self.family_tables.get(&key).copied())?;

        let decision = self.check(&tables[t], unit);
        self.record(unit, Stage::PreferredTable, Some(tables[t].number), decision);
        (decision == Decision::Placed).then_some(t)
    }

    fn try_honor_fallback(&mut self, tables: &mut [Table], unit: &[GuestId]) {
        let names = self.names(unit);
        let Some(h) = tables.iter().position(Table::is_honor) else {
            self.record(unit, Stage::HonorFallback, None, Decision::NoCandidate);
            self.push_warning(WarningKind::Unplaced, format!("cannot place {names}"), unit.to_vec());
            return;
        };

        let decision = self.check(&tables[h], unit);
        self.record(unit, Stage::HonorFallback, Some(tables[h].number), decision);

        if decision == Decision::Placed {
            self.push_warning(
                WarningKind::PlacedAtHonorTable,
                format!("{names} placed at the honor table for lack of space"),
                unit.to_vec(),
            );
            self.commit(tables, h, unit);
        } else {
            let reason = match decision {
                Decision::ExclusionConflict => "an exclusion blocks the honor table",
                _ => "no table has enough free seats",
            };
            self.push_warning(
                WarningKind::Unplaced,
                format!("cannot place {names}: {reason}"),
                unit.to_vec(),
            );
        }
    }

    /// Capacity first, then exclusions against already-seated guests.
    fn check(&self, table: &Table, unit: &[GuestId]) -> Decision {
        if table.remaining() < unit.len() {
            return Decision::NoCapacity;
        }
        let seated: Vec<GuestId> = table.guest_ids().collect();
        if self
            .relations
            .conflicts_between(unit.iter().copied(), &seated)
            .is_empty()
        {
            Decision::Placed
        } else {
            Decision::ExclusionConflict
        }
    }

    /// Seats the unit at table `t` and maintains the family map.
    fn commit(&mut self, tables: &mut [Table], t: usize, unit: &[GuestId]) {
        self.seat(tables, t, unit);

        // Only reachable for couple-groups that skipped validation.
        for (a, b) in self.relations.conflicts_within(unit) {
            self.warn_exclusion(a, b, tables[t].number);
        }

        let mut strays: Vec<GuestId> = Vec::new();
        let mut home: Option<usize> = None;
        for &id in unit {
            let Some(key) = self.guests[&id].family_key() else {
                continue;
            };
            match self.family_tables.get(&key).copied() {
                Some(ft) if ft != t => {
                    strays.push(id);
                    home.get_or_insert(ft);
                }
                Some(_) => {}
                None if !tables[t].is_honor() => {
                    self.family_tables.insert(key, t);
                }
                None => {}
            }
        }

        if self.by_family && !strays.is_empty() {
            let home = home.map_or(0, |h| tables[h].number);
            self.push_warning(
                WarningKind::FamilySplit,
                format!(
                    "{} seated at table {} away from family at table {home}",
                    self.names(&strays),
                    tables[t].number
                ),
                strays,
            );
        }
    }

    fn seat(&mut self, tables: &mut [Table], t: usize, unit: &[GuestId]) {
        for id in unit {
            tables[t].seat(self.guests[id].clone());
            self.placed.insert(*id);
        }
        tracing::debug!(table = tables[t].number, unit = ?unit, "unit seated");
    }

    fn warn_exclusion(&mut self, a: GuestId, b: GuestId, table: u32) {
        self.push_warning(
            WarningKind::ExclusionViolated,
            format!(
                "{} and {} share table {table} despite an exclusion",
                self.problem.display_name(a),
                self.problem.display_name(b)
            ),
            vec![a, b],
        );
    }

    fn push_warning(&mut self, kind: WarningKind, message: String, guests: Vec<GuestId>) {
        tracing::warn!(kind = ?kind, "{message}");
        self.warnings.push(Warning::new(kind, message, guests));
    }

    fn record(&mut self, unit: &[GuestId], stage: Stage, table: Option<u32>, decision: Decision) {
        self.trace.push(PlacementEvent {
            unit: unit.to_vec(),
            stage,
            table,
            decision,
        });
    }

    fn names(&self, ids: &[GuestId]) -> String {
        ids.iter()
            .map(|&id| self.problem.display_name(id))
            .collect::<Vec<_>>()
            .join(" and ")
    }
}
