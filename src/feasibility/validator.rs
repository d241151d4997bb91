//! Feasibility checks.

use std::collections::HashSet;

use crate::config::SeatingConfig;
use crate::error::FeasibilityError;
use crate::model::{GuestId, SeatingProblem};
use crate::relations::Relations;

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Validation {
    /// True iff `errors` is empty.
    pub valid: bool,
    /// Every structural problem found, in check order.
    pub errors: Vec<FeasibilityError>,
}

impl Validation {
    fn from_errors(errors: Vec<FeasibilityError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Human-readable error messages.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Checks whether any valid seating of `problem` under `config` can exist.
///
/// Pure: validating the same input twice yields the same result.
///
/// # Examples
///
/// ```
/// use u_seating::config::SeatingConfig;
/// use u_seating::feasibility::validate;
/// use u_seating::model::{Couple, Exclusion, Guest, GuestId, SeatingProblem};
///
/// let problem = SeatingProblem::new(vec![
///     Guest::new(GuestId(1), "Ana"),
///     Guest::new(GuestId(2), "Ben"),
/// ])
/// .with_couple(Couple(GuestId(1), GuestId(2)))
/// .with_exclusion(Exclusion(GuestId(2), GuestId(1)));
///
/// let v = validate(&problem, &SeatingConfig::default());
/// assert!(!v.valid);
/// assert!(v.messages()[0].contains("Ana and Ben"));
/// ```
pub fn validate(problem: &SeatingProblem, config: &SeatingConfig) -> Validation {
    if problem.guests.is_empty() {
        return Validation::from_errors(vec![FeasibilityError::EmptyGuestList]);
    }

    let relations = Relations::new(problem);
    let mut errors: Vec<FeasibilityError> = Vec::new();

    if let Err(e) = config.validate() {
        errors.push(e.into());
    }

    check_references(problem, &mut errors);

    let honor_set = relations.honor_set();
    if honor_set.len() > config.honor_table_seats {
        errors.push(FeasibilityError::HonorTableOverCapacity {
            required: honor_set.len(),
            seats: config.honor_table_seats,
        });
    }

    // Chained couples share one table, so an exclusion anywhere inside a
    // couple-group is as contradictory as one between direct partners.
    let groups = relations.couple_groups();
    for group in &groups {
        for (a, b) in relations.conflicts_within(group) {
            errors.push(FeasibilityError::CoupleExcluded {
                first: problem.display_name(a),
                second: problem.display_name(b),
            });
        }
    }

    let honor: HashSet<GuestId> = honor_set.into_iter().collect();
    for group in groups {
        let capacity = if group.iter().any(|id| honor.contains(id)) {
            config.honor_table_seats
        } else {
            config.seats_per_table
        };
        if group.len() > capacity {
            errors.push(FeasibilityError::OversizedCoupleGroup {
                members: group.iter().map(|&id| problem.display_name(id)).collect(),
                size: group.len(),
                capacity,
            });
        }
    }

    let seats = config.total_capacity();
    if problem.guests.len() > seats {
        errors.push(FeasibilityError::TotalCapacityExceeded {
            guests: problem.guests.len(),
            seats,
        });
    }

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "seating input rejected");
    }

    Validation::from_errors(errors)
}

fn check_references(problem: &SeatingProblem, errors: &mut Vec<FeasibilityError>) {
    let mut known = HashSet::new();
    let mut duplicates = HashSet::new();
    for guest in &problem.guests {
        if !known.insert(guest.id) && duplicates.insert(guest.id) {
            errors.push(FeasibilityError::DuplicateGuest(guest.id));
        }
    }

    let mut reported = HashSet::new();

    let referenced = problem
        .couples
        .iter()
        .flat_map(|c| [c.0, c.1])
        .chain(problem.exclusions.iter().flat_map(|e| [e.0, e.1]));

    for id in referenced {
        if !known.contains(&id) && reported.insert(id) {
            errors.push(FeasibilityError::UnknownGuest(id));
        }
    }
}
