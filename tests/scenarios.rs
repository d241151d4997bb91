//! End-to-end seating scenarios.

use u_seating::config::{SeatingConfig, SortCriteria};
use u_seating::edit::{advisories, move_guest};
use u_seating::export::to_csv_string;
use u_seating::model::{pad_roster, Couple, Exclusion, Guest, GuestId, Role, SeatingProblem};
use u_seating::placement::{Stage, WarningKind};
use u_seating::{FeasibilityError, SeatingPlanner};

fn guest(id: u64, first: &str) -> Guest {
    Guest::new(GuestId(id), first)
}

fn small_config() -> SeatingConfig {
    SeatingConfig::default()
        .with_table_count(2)
        .with_seats_per_table(2)
        .with_honor_table_seats(2)
}

#[test]
fn test_couple_with_excluded_third_party() {
    let problem = SeatingProblem::new(vec![
        guest(1, "A"),
        guest(2, "B"),
        guest(3, "C"),
        guest(4, "D"),
    ])
    .with_couple(Couple(GuestId(1), GuestId(2)))
    .with_exclusion(Exclusion(GuestId(1), GuestId(3)));

    let result = SeatingPlanner::run(&problem, &small_config());

    assert!(result.success);
    assert_eq!(result.table_of(GuestId(1)), result.table_of(GuestId(2)));
    assert_ne!(result.table_of(GuestId(1)), result.table_of(GuestId(3)));
    assert!(result.warnings.is_empty());
    assert!(result.unseated(&problem).is_empty());
}

#[test]
fn test_forced_conflict_is_named() {
    // One regular table and a full honor table: D has to join C.
    let problem = SeatingProblem::new(vec![
        guest(1, "A").with_role(Role::Witness),
        guest(2, "B"),
        guest(3, "C"),
        guest(4, "D"),
        guest(5, "E"),
    ])
    .with_couple(Couple(GuestId(1), GuestId(2)))
    .with_exclusion(Exclusion(GuestId(3), GuestId(4)));
    let config = SeatingConfig::default()
        .with_table_count(1)
        .with_seats_per_table(3)
        .with_honor_table_seats(2);

    let result = SeatingPlanner::run(&problem, &config);

    assert!(result.success);
    assert_eq!(result.table_of(GuestId(3)), result.table_of(GuestId(4)));
    let violation = result
        .warnings
        .iter()
        .find(|w| w.kind == WarningKind::ExclusionViolated)
        .expect("conflict should be reported");
    assert!(violation.guests.contains(&GuestId(3)));
    assert!(violation.guests.contains(&GuestId(4)));
    assert!(violation.message.contains('C') && violation.message.contains('D'));
}

#[test]
fn test_couple_also_excluded_rejected() {
    let problem = SeatingProblem::new(vec![guest(1, "A"), guest(2, "B")])
        .with_couple(Couple(GuestId(1), GuestId(2)))
        .with_exclusion(Exclusion(GuestId(1), GuestId(2)));

    let validation = SeatingPlanner::validate(&problem, &small_config());
    assert!(!validation.valid);
    assert!(validation.messages()[0].contains("A and B"));

    let result = SeatingPlanner::run(&problem, &small_config());
    assert!(!result.success);
    assert!(result.tables.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_over_total_capacity_rejected() {
    let guests: Vec<Guest> = (1..=7).map(|i| guest(i, "x")).collect();
    let result = SeatingPlanner::run(&SeatingProblem::new(guests), &small_config());

    assert!(!result.success);
    assert!(result.tables.is_empty());
    assert!(result
        .errors
        .iter()
        .any(|e| matches!(e, FeasibilityError::TotalCapacityExceeded { guests: 7, seats: 6 })));
}

#[test]
fn test_oversized_chain_rejected_before_placement() {
    let guests: Vec<Guest> = (1..=3).map(|i| guest(i, "x")).collect();
    let problem = SeatingProblem::new(guests)
        .with_couple(Couple(GuestId(1), GuestId(2)))
        .with_couple(Couple(GuestId(3), GuestId(2)));

    let result = SeatingPlanner::run(&problem, &small_config());
    assert!(!result.success);
    assert!(matches!(
        result.errors[0],
        FeasibilityError::OversizedCoupleGroup { size: 3, capacity: 2, .. }
    ));
}

#[test]
fn test_exclusion_inside_couple_chain_rejected() {
    let problem = SeatingProblem::new(vec![guest(1, "A"), guest(2, "B"), guest(3, "C")])
        .with_couple(Couple(GuestId(1), GuestId(2)))
        .with_couple(Couple(GuestId(2), GuestId(3)))
        .with_exclusion(Exclusion(GuestId(1), GuestId(3)));
    let config = SeatingConfig::default()
        .with_table_count(1)
        .with_seats_per_table(3)
        .with_honor_table_seats(0);

    let result = SeatingPlanner::run(&problem, &config);
    assert!(!result.success);
    assert!(result.tables.is_empty());
    assert_eq!(result.error_messages().len(), 1);
    assert!(result.error_messages()[0].contains("A and C"));
}

#[test]
fn test_duplicate_guest_ids_rejected() {
    let problem = SeatingProblem::new(vec![guest(1, "Ana"), guest(1, "Ben")]);

    let result = SeatingPlanner::run(&problem, &small_config());
    assert!(!result.success);
    assert_eq!(result.errors, vec![FeasibilityError::DuplicateGuest(GuestId(1))]);
}

#[test]
fn test_age_sort_ignores_family_names() {
    let problem = SeatingProblem::new(vec![
        guest(1, "Old").with_last_name("Adams").with_age(50),
        guest(2, "Kid").with_last_name("Zola").with_age(8),
    ]);
    let config = SeatingConfig::default()
        .with_table_count(2)
        .with_seats_per_table(1)
        .with_honor_table_seats(0)
        .with_criteria(SortCriteria::default().with_by_age(true));

    let result = SeatingPlanner::run(&problem, &config);
    assert!(result.success);
    assert_eq!(result.table_of(GuestId(2)), Some(2));
    assert_eq!(result.table_of(GuestId(1)), Some(3));
}

#[test]
fn test_chained_couples_share_a_table() {
    let guests: Vec<Guest> = (1..=5).map(|i| guest(i, "x")).collect();
    let problem = SeatingProblem::new(guests)
        .with_couple(Couple(GuestId(2), GuestId(3)))
        .with_couple(Couple(GuestId(3), GuestId(4)));
    let config = SeatingConfig::default()
        .with_table_count(2)
        .with_seats_per_table(3)
        .with_honor_table_seats(0);

    let result = SeatingPlanner::run(&problem, &config);
    assert!(result.success);
    let t = result.table_of(GuestId(2));
    assert!(t.is_some());
    assert_eq!(result.table_of(GuestId(3)), t);
    assert_eq!(result.table_of(GuestId(4)), t);
}

#[test]
fn test_large_family_split_is_reported() {
    let mut guests: Vec<Guest> = (1..=5)
        .map(|i| guest(i, "m").with_last_name("Novak"))
        .collect();
    guests.extend((6..=8).map(|i| guest(i, "s")));
    let config = SeatingConfig::default()
        .with_table_count(3)
        .with_seats_per_table(4)
        .with_honor_table_seats(0)
        .with_criteria(SortCriteria::default().with_by_family(true));
    let problem = SeatingProblem::new(guests);

    assert!(SeatingPlanner::validate(&problem, &config).valid);
    let result = SeatingPlanner::run(&problem, &config);
    assert!(result.success);

    let family_tables: std::collections::BTreeSet<u32> = (1..=5)
        .filter_map(|i| result.table_of(GuestId(i)))
        .collect();
    if family_tables.len() > 1 {
        assert!(result
            .warnings
            .iter()
            .any(|w| w.kind == WarningKind::FamilySplit));
    }
    assert_eq!(family_tables.len(), 2);
}

#[test]
fn test_family_members_sit_together_when_room() {
    let guests = vec![
        guest(1, "a").with_last_name("Ito"),
        guest(2, "b").with_last_name("Berg"),
        guest(3, "c").with_last_name("ito"),
        guest(4, "d").with_last_name("Berg"),
        guest(5, "e").with_last_name("ITO"),
    ];
    let config = SeatingConfig::default()
        .with_table_count(2)
        .with_seats_per_table(3)
        .with_honor_table_seats(0)
        .with_criteria(SortCriteria::default().with_by_family(true));

    let result = SeatingPlanner::run(&SeatingProblem::new(guests), &config);
    assert!(result.success);
    assert!(result.warnings.is_empty());
    let ito = result.table_of(GuestId(1));
    assert_eq!(result.table_of(GuestId(3)), ito);
    assert_eq!(result.table_of(GuestId(5)), ito);
    assert_eq!(result.table_of(GuestId(2)), result.table_of(GuestId(4)));
    assert_ne!(result.table_of(GuestId(2)), ito);
}

#[test]
fn test_fillers_fill_remaining_gaps() {
    let mut guests = vec![guest(1, "Ana"), guest(2, "Ben"), guest(3, "Cy")];
    pad_roster(&mut guests, 6);
    let problem = SeatingProblem::new(guests).with_exclusion(Exclusion(GuestId(2), GuestId(3)));
    let config = SeatingConfig::default()
        .with_total_guests(6)
        .with_table_count(2)
        .with_seats_per_table(3)
        .with_honor_table_seats(0);

    let result = SeatingPlanner::run(&problem, &config);
    assert!(result.success);
    assert!(result.unseated(&problem).is_empty());

    // Fillers are offered last.
    let offered: Vec<GuestId> = result
        .trace
        .iter()
        .filter(|e| e.stage == Stage::ConflictFree)
        .map(|e| e.unit[0])
        .collect();
    assert_eq!(&offered[3..], &[GuestId(4), GuestId(5), GuestId(6)]);
}

#[test]
fn test_manual_edits_and_export() {
    let problem = SeatingProblem::new(vec![
        guest(1, "Ana").with_last_name("Kim").with_role(Role::PrimaryHonoree),
        guest(2, "Ben").with_last_name("Kim"),
        guest(3, "Cy"),
        guest(4, "Di"),
    ])
    .with_couple(Couple(GuestId(3), GuestId(4)))
    .with_exclusion(Exclusion(GuestId(2), GuestId(3)));
    let config = SeatingConfig::default()
        .with_table_count(2)
        .with_seats_per_table(2)
        .with_honor_table_seats(2);

    let result = SeatingPlanner::run(&problem, &config);
    assert!(result.success);
    assert!(advisories(&result.tables, &problem).is_empty());

    let mut tables = result.tables.clone();
    let ben_table = result.table_of(GuestId(2)).unwrap();
    let cy_table = result.table_of(GuestId(3)).unwrap();
    assert_ne!(ben_table, cy_table);
    move_guest(&mut tables, GuestId(2), 1).unwrap();
    move_guest(&mut tables, GuestId(3), 1).unwrap_err();

    let kinds: Vec<WarningKind> = advisories(&tables, &problem)
        .into_iter()
        .map(|w| w.kind)
        .collect();
    assert!(kinds.is_empty(), "moving Ben to the honor table is clean: {kinds:?}");

    let csv = to_csv_string(&tables).unwrap();
    let first_row = csv.lines().nth(1).unwrap();
    assert_eq!(first_row, "1,Honor Table,Ana Kim,Honoree,Kim");
    assert_eq!(csv.lines().count(), 5);
}
