//! Warnings and decision trace.

use crate::model::GuestId;

/// Category of a [`Warning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WarningKind {
    /// Two guests who exclude each other share a table.
    ExclusionViolated,
    /// A unit went to the honor table for lack of space elsewhere.
    PlacedAtHonorTable,
    /// A unit could not be seated anywhere.
    Unplaced,
    /// Members of one family sit at different tables.
    FamilySplit,
    /// A couple sits at different tables. Only raised by edit advisories.
    CoupleSeparated,
    /// A table holds more guests than seats. Only raised by edit advisories.
    OverCapacity,
}

/// A non-blocking advisory about the seating.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
    /// Guests the warning is about.
    pub guests: Vec<GuestId>,
}

impl Warning {
    pub fn new(kind: WarningKind, message: impl Into<String>, guests: Vec<GuestId>) -> Self {
        Self {
            kind,
            message: message.into(),
            guests,
        }
    }
}

/// Search tier a decision was made in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Stage {
    HonorSeating,
    PreferredTable,
    ConflictFree,
    BestEffort,
    HonorFallback,
}

/// Outcome of trying a unit in one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Decision {
    Placed,
    /// The table lacks seats for the whole unit.
    NoCapacity,
    /// A unit member excludes someone already seated.
    ExclusionConflict,
    /// No table in this tier qualified.
    NoCandidate,
}

/// One auditable placement decision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementEvent {
    /// The unit being placed, leader first.
    pub unit: Vec<GuestId>,
    pub stage: Stage,
    /// Table number tried or chosen, if a specific table was involved.
    pub table: Option<u32>,
    pub decision: Decision,
}
