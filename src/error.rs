//! Error types.
//!
//! Only configuration and feasibility problems are errors. Everything the
//! placement engine runs into after validation is reported as a
//! [`Warning`](crate::placement::Warning) instead.

use thiserror::Error;

use crate::model::GuestId;

/// Invalid [`SeatingConfig`](crate::config::SeatingConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("{table_count} tables configured with zero seats per table")]
    ZeroSeatsPerTable { table_count: usize },

    #[error("{table_count} tables configured; table numbers allow at most {max}")]
    TooManyTables { table_count: usize, max: usize },
}

/// A structural reason no valid seating can exist.
///
/// The `Display` output is the human-readable message surfaced to users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeasibilityError {
    #[error("the guest list is empty")]
    EmptyGuestList,

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("relationship references unknown guest {0}")]
    UnknownGuest(GuestId),

    #[error("guest id {0} is used by more than one guest")]
    DuplicateGuest(GuestId),

    #[error("honor table needs {required} seats but only has {seats}")]
    HonorTableOverCapacity { required: usize, seats: usize },

    #[error("{first} and {second} must share a table as a couple but are declared as an exclusion")]
    CoupleExcluded { first: String, second: String },

    #[error(
        "couple group {} has {size} guests but its table only seats {capacity}",
        .members.join(", ")
    )]
    OversizedCoupleGroup {
        members: Vec<String>,
        size: usize,
        capacity: usize,
    },

    #[error("{guests} guests exceed the {seats} seats available")]
    TotalCapacityExceeded { guests: usize, seats: usize },
}

/// Failure of a post-generation edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("guest {0} is not seated at any table")]
    UnknownGuest(GuestId),

    #[error("table {0} does not exist")]
    UnknownTable(u32),

    #[error("table {number} is full ({capacity} seats)")]
    TableFull { number: u32, capacity: usize },
}

/// Failure while exporting a seating.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("export is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
