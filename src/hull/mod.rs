//! Convex hull construction.
//!
//! - [`convex_hull`] — Graham scan (1972), O(n log n)

mod graham;

pub use graham::{convex_hull, cross, find_pivot, polar_angle, ConvexHull};
