//! Random point sets for demos and tests.
//!
//! - [`random_points`] — Uniform sampling with distinct coordinates

mod uniform;

pub use uniform::random_points;
