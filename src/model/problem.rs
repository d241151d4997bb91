//! Input bundle for a generation run.

use super::guest::{Couple, Exclusion, Guest, GuestId};

/// Guests plus the relationships between them.
///
/// # Examples
///
/// ```
/// use u_seating::model::{Couple, Exclusion, Guest, GuestId, SeatingProblem};
///
/// let problem = SeatingProblem::new(vec![
///     Guest::new(GuestId(1), "Ana"),
///     Guest::new(GuestId(2), "Ben"),
///     Guest::new(GuestId(3), "Cy"),
/// ])
/// .with_couple(Couple(GuestId(1), GuestId(2)))
/// .with_exclusion(Exclusion(GuestId(1), GuestId(3)));
///
/// assert_eq!(problem.guest(GuestId(3)).map(|g| g.first_name.as_str()), Some("Cy"));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatingProblem {
    pub guests: Vec<Guest>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub couples: Vec<Couple>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclusions: Vec<Exclusion>,
}

impl SeatingProblem {
    pub fn new(guests: Vec<Guest>) -> Self {
        Self {
            guests,
            couples: Vec::new(),
            exclusions: Vec::new(),
        }
    }

    pub fn with_couple(mut self, couple: Couple) -> Self {
        self.couples.push(couple);
        self
    }

    pub fn with_couples(mut self, couples: impl IntoIterator<Item = Couple>) -> Self {
        self.couples.extend(couples);
        self
    }

    pub fn with_exclusion(mut self, exclusion: Exclusion) -> Self {
        self.exclusions.push(exclusion);
        self
    }

    pub fn with_exclusions(mut self, exclusions: impl IntoIterator<Item = Exclusion>) -> Self {
        self.exclusions.extend(exclusions);
        self
    }

    /// Looks a guest up by id.
    pub fn guest(&self, id: GuestId) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == id)
    }

    /// Display name for `id`, falling back to the id itself.
    pub fn display_name(&self, id: GuestId) -> String {
        self.guest(id)
            .map(Guest::full_name)
            .unwrap_or_else(|| id.to_string())
    }
}
