//! Post-pass per-table shuffle.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Table;

/// Permutes the guests of every non-honor table independently.
///
/// Uses an unbiased Fisher–Yates shuffle; membership never changes and
/// the honor table keeps its order.
pub fn shuffle_tables<R: Rng + ?Sized>(tables: &mut [Table], rng: &mut R) {
    for table in tables.iter_mut().filter(|t| !t.is_honor()) {
        table.guests.shuffle(rng);
    }
}
