//! Domain model types for planar tours.
//!
//! Points carry immutable integer coordinates and a stable id, edges cache
//! their Euclidean length, and a tour is an ordered cycle of edges.

mod edge;
mod point;
mod tour;

pub use edge::Edge;
pub use point::{validate_points, Coord, Point, MIN_POINTS};
pub use tour::Tour;
