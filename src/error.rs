//! Error types for tour construction.

use thiserror::Error;

use crate::models::Tour;

/// Result type alias for tour operations.
pub type Result<T> = std::result::Result<T, TourError>;

/// Unified error type for all solvers in this crate.
#[derive(Debug, Error)]
pub enum TourError {
    /// The point set violates a precondition (too few points, duplicate
    /// coordinates or ids, inconsistent working sets).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A brute-force search was stopped before it covered every permutation.
    ///
    /// Carries the best tour seen before the abort.
    #[error(
        "search aborted after {permutations_visited} permutations (best length {:.4})",
        .best.length()
    )]
    SearchAborted {
        /// Best tour found before cancellation.
        best: Box<Tour>,
        /// Number of permutations evaluated.
        permutations_visited: u64,
    },

    /// Every input point lies on one line.
    #[error("degenerate geometry: all {points} points are collinear")]
    DegenerateGeometry {
        /// Number of points in the set.
        points: usize,
    },
}

impl TourError {
    /// Shorthand for [`TourError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
