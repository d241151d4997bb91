//! Guest records and pairwise relationships.

use std::fmt;

/// Opaque unique guest identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GuestId(pub u64);

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The part a guest plays at the event.
///
/// Drives both the role tie-break in sequencing and automatic honor
/// seating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    /// One of the people the event is held for.
    PrimaryHonoree,
    Witness,
    Bridesmaid,
    Groomsman,
    #[default]
    Regular,
}

impl Role {
    /// Sequencing rank. Lower ranks are offered to the placement engine first.
    pub fn rank(self) -> u8 {
        match self {
            Role::PrimaryHonoree => 0,
            Role::Witness => 1,
            Role::Bridesmaid | Role::Groomsman => 2,
            Role::Regular => 3,
        }
    }

    /// Whether guests with this role are seated at the honor table
    /// automatically.
    pub fn is_honor_seated(self) -> bool {
        matches!(self, Role::PrimaryHonoree | Role::Witness)
    }

    /// Display label used by exports.
    pub fn label(self) -> &'static str {
        match self {
            Role::PrimaryHonoree => "Honoree",
            Role::Witness => "Witness",
            Role::Bridesmaid => "Bridesmaid",
            Role::Groomsman => "Groomsman",
            Role::Regular => "Guest",
        }
    }
}

/// A person to be seated.
///
/// # Examples
///
/// ```
/// use u_seating::model::{Guest, GuestId, Role};
///
/// let g = Guest::new(GuestId(1), "Ana")
///     .with_last_name("  Ortega ")
///     .with_age(34)
///     .with_role(Role::Witness);
/// assert_eq!(g.full_name(), "Ana Ortega");
/// assert_eq!(g.family_key().as_deref(), Some("ortega"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Guest {
    pub id: GuestId,
    pub first_name: String,
    /// Family name. Enables family grouping when present.
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub age: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: Role,
}

impl Guest {
    /// Creates a regular guest with only a given name.
    pub fn new(id: GuestId, first_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: None,
            age: None,
            role: Role::Regular,
        }
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Given name followed by the trimmed family name, if any.
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref().map(str::trim) {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name.trim(), last),
            _ => self.first_name.trim().to_string(),
        }
    }

    /// Normalized family name: trimmed and lower-cased.
    ///
    /// Returns `None` for a missing or blank family name.
    pub fn family_key(&self) -> Option<String> {
        let last = self.last_name.as_deref()?.trim();
        if last.is_empty() {
            None
        } else {
            Some(last.to_lowercase())
        }
    }

    /// Whether this guest was generated to pad the roster.
    pub fn is_filler(&self) -> bool {
        self.last_name
            .as_deref()
            .map_or(true, |l| l.trim().is_empty())
            && super::filler::is_auto_generated_filler_name(&self.first_name)
    }
}

macro_rules! unordered_pair {
    ($name:ident) => {
        impl $name {
            /// Whether `id` is one of the two members.
            pub fn involves(&self, id: GuestId) -> bool {
                self.0 == id || self.1 == id
            }

            /// The member opposite `id`, or `None` if `id` is not in the pair.
            pub fn other(&self, id: GuestId) -> Option<GuestId> {
                if self.0 == id {
                    Some(self.1)
                } else if self.1 == id {
                    Some(self.0)
                } else {
                    None
                }
            }

            /// Order-insensitive comparison against two ids.
            pub fn same_pair(&self, a: GuestId, b: GuestId) -> bool {
                (self.0 == a && self.1 == b) || (self.0 == b && self.1 == a)
            }

            /// Both members in ascending id order.
            pub fn key(&self) -> (GuestId, GuestId) {
                if self.0 <= self.1 {
                    (self.0, self.1)
                } else {
                    (self.1, self.0)
                }
            }
        }
    };
}

/// Two guests who must always share a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Couple(pub GuestId, pub GuestId);

/// Two guests who should not share a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exclusion(pub GuestId, pub GuestId);

unordered_pair!(Couple);
unordered_pair!(Exclusion);
