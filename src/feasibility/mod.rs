//! Feasibility validation.
//!
//! Decides whether a valid seating can exist before any table is created.
//! Every check runs independently and all errors are collected; only an
//! empty guest list short-circuits.
//!
//! Checks, in order:
//!
//! 1. Guest list non-empty
//! 2. Configuration valid
//! 3. Couples and exclusions reference known guests
//! 4. Honor-seated guests plus their couple-groups fit the honor table
//! 5. No couple is also an exclusion
//! 6. No couple-group outgrows the table it must share
//! 7. The roster fits the total number of seats

mod validator;

pub use validator::{validate, Validation};
