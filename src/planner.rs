//! Seating generation entry points.
//!
//! # Algorithm
//!
//! 1. Validate feasibility; stop with `success = false` on any error
//! 2. Create the honor table and `table_count` regular tables
//! 3. Seat honor-role guests and their couple-groups at the honor table
//! 4. Sequence the remaining guests
//! 5. Place each unit with the tiered search
//! 6. Optionally shuffle every non-honor table
//!
//! Every run recomputes the whole assignment; nothing carries over
//! between runs.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SeatingConfig;
use crate::error::FeasibilityError;
use crate::feasibility::{validate, Validation};
use crate::model::{Guest, GuestId, SeatingProblem, Table, HONOR_TABLE_NUMBER};
use crate::placement::{shuffle_tables, PlacementEngine, PlacementEvent, Warning};
use crate::relations::Relations;
use crate::sequencing::sequence;

/// Result of a generation run.
///
/// Handed off whole; the core never touches it again.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatingResult {
    /// False iff validation failed.
    pub success: bool,
    /// Honor table first, then regular tables in creation order.
    pub tables: Vec<Table>,
    /// Soft-constraint advisories from placement.
    pub warnings: Vec<Warning>,
    /// Validation errors. Empty on success.
    pub errors: Vec<FeasibilityError>,
    /// Every placement decision, in order.
    pub trace: Vec<PlacementEvent>,
}

impl SeatingResult {
    fn rejected(errors: Vec<FeasibilityError>) -> Self {
        Self {
            success: false,
            tables: Vec::new(),
            warnings: Vec::new(),
            errors,
            trace: Vec::new(),
        }
    }

    /// The honor table, if the run succeeded.
    pub fn honor_table(&self) -> Option<&Table> {
        self.tables.iter().find(|t| t.is_honor())
    }

    /// Number of the table `id` sits at.
    pub fn table_of(&self, id: GuestId) -> Option<u32> {
        self.tables
            .iter()
            .find(|t| t.contains(id))
            .map(|t| t.number)
    }

    /// Guests of `problem` that no table holds.
    pub fn unseated<'a>(&self, problem: &'a SeatingProblem) -> Vec<&'a Guest> {
        let seated: HashSet<GuestId> = self.tables.iter().flat_map(Table::guest_ids).collect();
        problem
            .guests
            .iter()
            .filter(|g| !seated.contains(&g.id))
            .collect()
    }

    /// Human-readable validation errors.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Seating generation runner.
pub struct SeatingPlanner;

impl SeatingPlanner {
    /// Checks feasibility without placing anyone.
    pub fn validate(problem: &SeatingProblem, config: &SeatingConfig) -> Validation {
        validate(problem, config)
    }

    /// Generates a seating.
    ///
    /// The post-pass shuffle draws from `StdRng` seeded with
    /// `config.seed`, or from the thread-local generator when unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_seating::config::SeatingConfig;
    /// use u_seating::model::{Couple, Guest, GuestId, Role, SeatingProblem};
    /// use u_seating::planner::SeatingPlanner;
    ///
    /// let problem = SeatingProblem::new(vec![
    ///     Guest::new(GuestId(1), "Ana").with_role(Role::PrimaryHonoree),
    ///     Guest::new(GuestId(2), "Ben"),
    ///     Guest::new(GuestId(3), "Cy"),
    /// ])
    /// .with_couple(Couple(GuestId(1), GuestId(2)));
    /// let config = SeatingConfig::default().with_table_count(1).with_seats_per_table(4);
    ///
    /// let result = SeatingPlanner::run(&problem, &config);
    /// assert!(result.success);
    /// assert_eq!(result.table_of(GuestId(2)), Some(1));
    /// assert_eq!(result.table_of(GuestId(3)), Some(2));
    /// ```
    pub fn run(problem: &SeatingProblem, config: &SeatingConfig) -> SeatingResult {
        match config.seed {
            Some(seed) => Self::run_with_rng(problem, config, &mut StdRng::seed_from_u64(seed)),
            None => Self::run_with_rng(problem, config, &mut rand::rng()),
        }
    }

    /// Generates a seating, shuffling with `rng` when randomization is on.
    ///
    /// `rng` is not touched when the randomize criterion is off, so the
    /// result is then fully determined by the input.
    pub fn run_with_rng<R: Rng + ?Sized>(
        problem: &SeatingProblem,
        config: &SeatingConfig,
        rng: &mut R,
    ) -> SeatingResult {
        let validation = validate(problem, config);
        if !validation.valid {
            tracing::info!(errors = validation.errors.len(), "seating generation rejected");
            return SeatingResult::rejected(validation.errors);
        }

        let relations = Relations::new(problem);
        let mut tables = create_tables(config);

        let honor_set = relations.honor_set();
        let mut engine = PlacementEngine::new(problem, &relations, config.criteria.by_family);
        engine.seat_honor_guests(&mut tables, &honor_set);

        let honor: HashSet<GuestId> = honor_set.into_iter().collect();
        let remaining: Vec<Guest> = problem
            .guests
            .iter()
            .filter(|g| !honor.contains(&g.id))
            .cloned()
            .collect();
        let order = sequence(&remaining, &relations, &config.criteria);
        engine.place_all(&mut tables, &order);

        if config.criteria.randomize {
            shuffle_tables(&mut tables, rng);
        }

        let (warnings, trace) = engine.finish();
        tracing::info!(
            guests = problem.guests.len(),
            tables = tables.len(),
            warnings = warnings.len(),
            "seating generated"
        );

        SeatingResult {
            success: true,
            tables,
            warnings,
            errors: Vec::new(),
            trace,
        }
    }
}

/// Honor table (number 1) followed by `table_count` tables numbered from 2.
fn create_tables(config: &SeatingConfig) -> Vec<Table> {
    let mut tables = Vec::with_capacity(config.table_count.saturating_add(1));
    tables.push(Table::honor(config.honor_table_seats));
    for i in 0..config.table_count {
        let number = HONOR_TABLE_NUMBER + 1 + i as u32;
        tables.push(Table::new(
            number,
            format!("Table {number}"),
            config.seats_per_table,
        ));
    }
    tables
}
