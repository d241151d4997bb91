//! Generation configuration.

mod criteria;

pub use criteria::{SortCriteria, TableShape};

use crate::error::ConfigError;

/// Configuration for a seating generation run.
///
/// Table count and per-table capacity are fixed before placement starts;
/// the engine never adds tables mid-run.
///
/// # Examples
///
/// ```
/// use u_seating::config::{SeatingConfig, SortCriteria};
///
/// let config = SeatingConfig::default()
///     .with_table_count(6)
///     .with_seats_per_table(10)
///     .with_honor_table_seats(12)
///     .with_criteria(SortCriteria::default().with_by_family(true));
/// assert!(config.validate().is_ok());
/// assert_eq!(config.total_capacity(), 72);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeatingConfig {
    /// Configured roster size. Used by the data-entry surface to pad the
    /// roster with fillers.
    pub total_guests: usize,

    /// Number of tables besides the honor table.
    pub table_count: usize,

    /// Seats at each non-honor table.
    pub seats_per_table: usize,

    /// Seats at the honor table.
    pub honor_table_seats: usize,

    /// Enabled sorting criteria.
    pub criteria: SortCriteria,

    /// Table shape, for renderers only.
    pub shape: TableShape,

    /// Seed for the post-pass shuffle. `None` uses a non-deterministic source.
    pub seed: Option<u64>,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            total_guests: 0,
            table_count: 10,
            seats_per_table: 8,
            honor_table_seats: 8,
            criteria: SortCriteria::default(),
            shape: TableShape::default(),
            seed: None,
        }
    }
}

impl SeatingConfig {
    pub fn with_total_guests(mut self, n: usize) -> Self {
        self.total_guests = n;
        self
    }

    pub fn with_table_count(mut self, n: usize) -> Self {
        self.table_count = n;
        self
    }

    pub fn with_seats_per_table(mut self, n: usize) -> Self {
        self.seats_per_table = n;
        self
    }

    pub fn with_honor_table_seats(mut self, n: usize) -> Self {
        self.honor_table_seats = n;
        self
    }

    pub fn with_criteria(mut self, criteria: SortCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_shape(mut self, shape: TableShape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seats across all tables, honor table included.
    pub fn total_capacity(&self) -> usize {
        self.table_count
            .saturating_mul(self.seats_per_table)
            .saturating_add(self.honor_table_seats)
    }

    /// Largest `table_count` whose tables can all be numbered after the
    /// honor table.
    pub const MAX_TABLE_COUNT: usize = (u32::MAX - 1) as usize;

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_count > Self::MAX_TABLE_COUNT {
            return Err(ConfigError::TooManyTables {
                table_count: self.table_count,
                max: Self::MAX_TABLE_COUNT,
            });
        }
        if self.table_count > 0 && self.seats_per_table == 0 {
            return Err(ConfigError::ZeroSeatsPerTable {
                table_count: self.table_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SeatingConfig::default();
        assert_eq!(config.table_count, 10);
        assert_eq!(config.seats_per_table, 8);
        assert_eq!(config.honor_table_seats, 8);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_seats() {
        let config = SeatingConfig::default().with_seats_per_table(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroSeatsPerTable { table_count: 10 })
        );
    }

    #[test]
    fn test_zero_seats_without_tables_is_fine() {
        let config = SeatingConfig::default()
            .with_table_count(0)
            .with_seats_per_table(0);
        assert!(config.validate().is_ok());
        assert_eq!(config.total_capacity(), 8);
    }

    #[test]
    fn test_builder() {
        let config = SeatingConfig::default()
            .with_total_guests(40)
            .with_table_count(4)
            .with_seats_per_table(9)
            .with_honor_table_seats(4)
            .with_shape(TableShape::Rectangular)
            .with_seed(7);

        assert_eq!(config.total_guests, 40);
        assert_eq!(config.total_capacity(), 40);
        assert_eq!(config.shape, TableShape::Rectangular);
        assert_eq!(config.seed, Some(7));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_validate_table_count_limit() {
        let config =
            SeatingConfig::default().with_table_count(SeatingConfig::MAX_TABLE_COUNT + 1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyTables { .. })
        ));
    }

    #[test]
    fn test_total_capacity_saturates() {
        let config = SeatingConfig::default()
            .with_table_count(usize::MAX / 2)
            .with_seats_per_table(4);
        assert_eq!(config.total_capacity(), usize::MAX);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_json() {
        let config: SeatingConfig =
            serde_json::from_str(r#"{"table_count": 3, "criteria": {"by_role": true}}"#).unwrap();
        assert_eq!(config.table_count, 3);
        assert_eq!(config.seats_per_table, 8);
        assert!(config.criteria.by_role);
        assert!(!config.criteria.by_family);
    }
}
