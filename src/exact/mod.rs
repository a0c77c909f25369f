//! Exact solvers.
//!
//! - [`brute_force`] — Exhaustive permutation search, O(n!·n), cancellable
//! - [`next_permutation`] — Lexicographic successor used to drive the search
//! - [`BruteForceConfig`] / [`CancelToken`] — Time limit, parallelism, and cooperative abort

mod brute_force;
mod config;
mod permutation;

pub use brute_force::{brute_force, OptimalTour};
pub use config::{BruteForceConfig, CancelToken};
pub use permutation::{next_permutation, permutation_count};
