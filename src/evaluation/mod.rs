//! Tour feasibility checking.
//!
//! - [`validate_tour`] — Checks that a tour is one Hamiltonian cycle over a point set

mod validator;

pub use validator::validate_tour;
