//! Tables.

use super::guest::{Guest, GuestId};

/// Number reserved for the honor table.
pub const HONOR_TABLE_NUMBER: u32 = 1;

/// A bounded seating group.
///
/// `guests` is ordered; the order is what renderers show around the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Table number. 1 is the honor table.
    pub number: u32,
    /// Display name, editable after generation.
    pub name: String,
    /// Number of seats.
    pub capacity: usize,
    /// Seated guests in seating order.
    pub guests: Vec<Guest>,
}

impl Table {
    /// Creates an empty table.
    pub fn new(number: u32, name: impl Into<String>, capacity: usize) -> Self {
        Self {
            number,
            name: name.into(),
            capacity,
            guests: Vec::new(),
        }
    }

    /// Creates the empty honor table.
    pub fn honor(capacity: usize) -> Self {
        Self::new(HONOR_TABLE_NUMBER, "Honor Table", capacity)
    }

    pub fn is_honor(&self) -> bool {
        self.number == HONOR_TABLE_NUMBER
    }

    /// Free seats. Zero when over capacity.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.guests.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    pub fn contains(&self, id: GuestId) -> bool {
        self.guests.iter().any(|g| g.id == id)
    }

    /// Ids of the seated guests, in seating order.
    pub fn guest_ids(&self) -> impl Iterator<Item = GuestId> + '_ {
        self.guests.iter().map(|g| g.id)
    }

    /// Appends a guest. Capacity is the caller's concern.
    pub fn seat(&mut self, guest: Guest) {
        self.guests.push(guest);
    }

    /// Removes a guest, returning it if it was seated here.
    pub fn remove(&mut self, id: GuestId) -> Option<Guest> {
        let pos = self.guests.iter().position(|g| g.id == id)?;
        Some(self.guests.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_accounting() {
        let mut t = Table::new(2, "Table 2", 2);
        assert_eq!(t.remaining(), 2);
        t.seat(Guest::new(GuestId(1), "Ana"));
        t.seat(Guest::new(GuestId(2), "Ben"));
        assert!(t.is_full());
        t.seat(Guest::new(GuestId(3), "Cy"));
        assert_eq!(t.remaining(), 0);
    }

    #[test]
    fn test_remove() {
        let mut t = Table::honor(4);
        assert!(t.is_honor());
        t.seat(Guest::new(GuestId(1), "Ana"));
        assert!(t.contains(GuestId(1)));
        assert_eq!(t.remove(GuestId(1)).map(|g| g.id), Some(GuestId(1)));
        assert!(t.remove(GuestId(1)).is_none());
    }
}
