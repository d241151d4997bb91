//! Advisories for an arbitrary table state.

use std::collections::{BTreeSet, HashMap};

use crate::model::{GuestId, SeatingProblem, Table};
use crate::placement::{Warning, WarningKind};
use crate::relations::Relations;

/// Re-derives advisories from the current tables.
///
/// Reports, in this order: exclusions sharing a table, couples at
/// different tables, families spread over several regular tables, and
/// tables holding more guests than seats. The honor table does not count
/// towards family splits.
pub fn advisories(tables: &[Table], problem: &SeatingProblem) -> Vec<Warning> {
    let relations = Relations::new(problem);
    let mut out = Vec::new();

    for table in tables {
        let ids: Vec<GuestId> = table.guest_ids().collect();
        for (a, b) in relations.conflicts_within(&ids) {
            out.push(Warning::new(
                WarningKind::ExclusionViolated,
                format!(
                    "{} and {} share table {} despite an exclusion",
                    problem.display_name(a),
                    problem.display_name(b),
                    table.number
                ),
                vec![a, b],
            ));
        }
    }

    let seat_of: HashMap<GuestId, u32> = tables
        .iter()
        .flat_map(|t| t.guest_ids().map(move |id| (id, t.number)))
        .collect();

    for couple in &problem.couples {
        if let (Some(a), Some(b)) = (seat_of.get(&couple.0), seat_of.get(&couple.1)) {
            if a != b {
                out.push(Warning::new(
                    WarningKind::CoupleSeparated,
                    format!(
                        "{} (table {a}) and {} (table {b}) are separated",
                        problem.display_name(couple.0),
                        problem.display_name(couple.1)
                    ),
                    vec![couple.0, couple.1],
                ));
            }
        }
    }

    // Family name -> (members, regular tables), in first-seen order.
    let mut families: Vec<(String, Vec<GuestId>, BTreeSet<u32>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for table in tables.iter().filter(|t| !t.is_honor()) {
        for guest in &table.guests {
            let Some(key) = guest.family_key() else {
                continue;
            };
            let i = *index.entry(key.clone()).or_insert_with(|| {
                families.push((key, Vec::new(), BTreeSet::new()));
                families.len() - 1
            });
            families[i].1.push(guest.id);
            families[i].2.insert(table.number);
        }
    }
    for (family, members, numbers) in families {
        if numbers.len() > 1 {
            let list = numbers
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            out.push(Warning::new(
                WarningKind::FamilySplit,
                format!("family {family} is split across tables {list}"),
                members,
            ));
        }
    }

    for table in tables {
        if table.guests.len() > table.capacity {
            out.push(Warning::new(
                WarningKind::OverCapacity,
                format!(
                    "table {} seats {} guests but has {} seats",
                    table.number,
                    table.guests.len(),
                    table.capacity
                ),
                table.guest_ids().collect(),
            ));
        }
    }

    out
}
