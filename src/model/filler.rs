//! Auto-generated filler guests.
//!
//! The data-entry surface pads the roster up to the configured guest count
//! with placeholders named `"Guest <n>"`. Fillers carry no constraints and
//! are always sequenced last.

use super::guest::{Guest, GuestId};

/// Fixed given-name prefix of every filler guest.
pub const FILLER_PREFIX: &str = "Guest";

/// Whether `name` matches the filler pattern `"Guest <n>"` (`n >= 1`).
///
/// # Examples
///
/// ```
/// use u_seating::model::is_auto_generated_filler_name;
///
/// assert!(is_auto_generated_filler_name("Guest 7"));
/// assert!(is_auto_generated_filler_name("  Guest 12 "));
/// assert!(!is_auto_generated_filler_name("Guest"));
/// assert!(!is_auto_generated_filler_name("Guest 0"));
/// assert!(!is_auto_generated_filler_name("Guest seven"));
/// ```
pub fn is_auto_generated_filler_name(name: &str) -> bool {
    let Some(rest) = name.trim().strip_prefix(FILLER_PREFIX) else {
        return false;
    };
    let Some(digits) = rest.strip_prefix(' ') else {
        return false;
    };
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && digits.bytes().any(|b| b != b'0')
}

/// The filler name for the `n`-th placeholder.
pub fn filler_name(n: usize) -> String {
    format!("{FILLER_PREFIX} {n}")
}

/// Appends filler guests until `guests` holds `total` entries.
///
/// New ids continue above the current maximum id; numbering of the
/// placeholder names continues from the roster length. Returns the number
/// of fillers added. Never removes guests.
pub fn pad_roster(guests: &mut Vec<Guest>, total: usize) -> usize {
    let missing = total.saturating_sub(guests.len());
    let mut next_id = guests.iter().map(|g| g.id.0 + 1).max().unwrap_or(1);

    for _ in 0..missing {
        let n = guests.len() + 1;
        guests.push(Guest::new(GuestId(next_id), filler_name(n)));
        next_id += 1;
    }

    missing
}
