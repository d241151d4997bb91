//! Table mutations.

use crate::error::MoveError;
use crate::model::{GuestId, Table};

/// Moves a guest to the end of another table.
///
/// Capacity is re-checked; exclusions are not. Moving a guest to the table
/// it already sits at is a no-op.
///
/// # Examples
///
/// ```
/// use u_seating::edit::move_guest;
/// use u_seating::model::{Guest, GuestId, Table};
///
/// let mut tables = vec![Table::new(2, "Table 2", 2), Table::new(3, "Table 3", 1)];
/// tables[0].seat(Guest::new(GuestId(1), "Ana"));
///
/// move_guest(&mut tables, GuestId(1), 3).unwrap();
/// assert!(tables[1].contains(GuestId(1)));
/// assert!(move_guest(&mut tables, GuestId(9), 2).is_err());
/// ```
pub fn move_guest(tables: &mut [Table], guest: GuestId, to_table: u32) -> Result<(), MoveError> {
    let from = tables
        .iter()
        .position(|t| t.contains(guest))
        .ok_or(MoveError::UnknownGuest(guest))?;
    let to = tables
        .iter()
        .position(|t| t.number == to_table)
        .ok_or(MoveError::UnknownTable(to_table))?;

    if from == to {
        return Ok(());
    }
    if tables[to].is_full() {
        return Err(MoveError::TableFull {
            number: tables[to].number,
            capacity: tables[to].capacity,
        });
    }

    let seated = tables[from]
        .remove(guest)
        .ok_or(MoveError::UnknownGuest(guest))?;
    tracing::debug!(guest = %guest, from = tables[from].number, to = to_table, "guest moved");
    tables[to].seat(seated);
    Ok(())
}

/// Renames a table.
pub fn rename_table(
    tables: &mut [Table],
    number: u32,
    name: impl Into<String>,
) -> Result<(), MoveError> {
    let table = tables
        .iter_mut()
        .find(|t| t.number == number)
        .ok_or(MoveError::UnknownTable(number))?;
    table.name = name.into();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Guest;

    fn setup() -> Vec<Table> {
        let mut a = Table::new(2, "Table 2", 2);
        a.seat(Guest::new(GuestId(1), "Ana"));
        a.seat(Guest::new(GuestId(2), "Ben"));
        let mut b = Table::new(3, "Table 3", 2);
        b.seat(Guest::new(GuestId(3), "Cy"));
        vec![a, b]
    }

    #[test]
    fn test_move_respects_capacity() {
        let mut tables = setup();
        move_guest(&mut tables, GuestId(1), 3).unwrap();
        assert_eq!(tables[0].guests.len(), 1);
        assert_eq!(tables[1].guests.len(), 2);

        assert_eq!(
            move_guest(&mut tables, GuestId(2), 3),
            Err(MoveError::TableFull { number: 3, capacity: 2 })
        );
        assert!(tables[0].contains(GuestId(2)));
    }

    #[test]
    fn test_move_to_same_table_is_noop() {
        let mut tables = setup();
        let before = tables.clone();
        move_guest(&mut tables, GuestId(1), 2).unwrap();
        assert_eq!(tables, before);
    }

    #[test]
    fn test_move_unknown_targets() {
        let mut tables = setup();
        assert_eq!(
            move_guest(&mut tables, GuestId(1), 9),
            Err(MoveError::UnknownTable(9))
        );
        assert_eq!(
            move_guest(&mut tables, GuestId(8), 2),
            Err(MoveError::UnknownGuest(GuestId(8)))
        );
    }

    #[test]
    fn test_rename() {
        let mut tables = setup();
        rename_table(&mut tables, 3, "Cousins").unwrap();
        assert_eq!(tables[1].name, "Cousins");
        assert!(rename_table(&mut tables, 5, "x").is_err());
    }
}
