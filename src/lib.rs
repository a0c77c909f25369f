//! # u-tour
//!
//! Planar travelling-salesman tours over integer points: an exact convex
//! hull, a hull-seeded cheapest-insertion heuristic, and a cancellable
//! brute-force optimum.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Coord, Point, Edge, Tour)
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`sorting`] — Median-of-three quicksort with insertion-sort cutoff
//! - [`hull`] — Graham scan convex hull
//! - [`constructive`] — Cheapest-insertion tour construction
//! - [`exact`] — Brute-force permutation search with time limit and cancellation
//! - [`evaluation`] — Hamiltonian-cycle validation
//! - [`generator`] — Random point sets with distinct coordinates
//!
//! ## Example
//!
//! ```
//! use u_tour::models::Point;
//! use u_tour::hull::convex_hull;
//! use u_tour::constructive::cheapest_insertion;
//! use u_tour::exact::{brute_force, BruteForceConfig, CancelToken};
//!
//! let points = vec![
//!     Point::new(0, 0, 0),
//!     Point::new(1, 8, 0),
//!     Point::new(2, 8, 6),
//!     Point::new(3, 0, 6),
//!     Point::new(4, 3, 2),
//! ];
//! let hull = convex_hull(&points).unwrap();
//! let heuristic = cheapest_insertion(&points, &hull).unwrap();
//! let optimal = brute_force(&points, &BruteForceConfig::default(), &CancelToken::new()).unwrap();
//!
//! assert!(optimal.is_complete());
//! assert!(optimal.length() <= heuristic.length() + 1e-9);
//! assert!(heuristic.length() >= hull.perimeter());
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod generator;
pub mod hull;
pub mod models;
pub mod sorting;

pub use error::{Result, TourError};
