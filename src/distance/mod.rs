//! Distance matrices.
//!
//! Provides a dense Euclidean distance matrix over point positions.

mod matrix;

pub use matrix::DistanceMatrix;
