//! Relationship resolution.
//!
//! Answers the questions every later stage asks about a guest list:
//! who must sit with whom, who should not sit together, and which guests
//! form one inseparable couple-group.
//!
//! Couples are edges of an undirected graph. A guest normally has at most
//! one partner, but chained couples (A–B, B–C) are handled: the whole
//! connected component moves as one unit.

mod resolver;

pub use resolver::Relations;
