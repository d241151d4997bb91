//! CSV export.
//!
//! One row per seated guest, tables in number order (the honor table is
//! number 1), guests in seating order. Columns:
//! `table_number, table_name, guest, role, family_name`.

use std::io;

use crate::error::ExportError;
use crate::model::Table;

const HEADER: [&str; 5] = ["table_number", "table_name", "guest", "role", "family_name"];

/// Writes the seating as CSV.
pub fn write_csv<W: io::Write>(tables: &[Table], writer: W) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER)?;

    let mut ordered: Vec<&Table> = tables.iter().collect();
    ordered.sort_by_key(|t| t.number);

    for table in ordered {
        let number = table.number.to_string();
        for guest in &table.guests {
            out.write_record([
                number.as_str(),
                table.name.as_str(),
                guest.full_name().as_str(),
                guest.role.label(),
                guest.last_name.as_deref().map_or("", str::trim),
            ])?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Renders the seating as a CSV string.
///
/// # Examples
///
/// ```
/// use u_seating::export::to_csv_string;
/// use u_seating::model::{Guest, GuestId, Role, Table};
///
/// let mut honor = Table::honor(2);
/// honor.seat(Guest::new(GuestId(1), "Ana").with_last_name("Kim").with_role(Role::PrimaryHonoree));
///
/// let csv = to_csv_string(&[honor]).unwrap();
/// assert_eq!(
///     csv,
///     "table_number,table_name,guest,role,family_name\n1,Honor Table,Ana Kim,Honoree,Kim\n"
/// );
/// ```
pub fn to_csv_string(tables: &[Table]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(tables, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
