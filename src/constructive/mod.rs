//! Constructive heuristics for building tours.
//!
//! - [`cheapest_insertion`] — Hull-seeded cheapest insertion, O(n³)
//! - [`cheapest_insertion_tour`] — Convex hull followed by cheapest insertion

mod cheapest_insertion;

pub use cheapest_insertion::{cheapest_insertion, cheapest_insertion_tour};
