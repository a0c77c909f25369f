//! Cheapest-insertion tour construction.
//!
//! # Algorithm
//!
//! Start from the convex hull as a closed cycle. While interior points
//! remain, evaluate every (tour edge, interior point) pair by its marginal
//! cost
//!
//! ```text
//! cost = d(a, c) + d(c, b) - d(a, b)
//! ```
//!
//! and splice the globally cheapest point into its edge.
//!
//! Ties go to the first minimum found: edges are scanned in cycle order
//! starting at the hull pivot, and candidates in ascending input position.
//!
//! # Complexity
//!
//! O(n³): n insertions, each scanning O(n) edges × O(n) candidates.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::hull::{convex_hull, ConvexHull};
use crate::models::{Point, Tour};

/// Grows the hull into a full tour by cheapest insertion.
///
/// `hull` must have been computed from `points`: its vertices and interior
/// together must name every position exactly once.
///
/// # Errors
///
/// [`TourError::InvalidInput`] if `points` is empty or the hull does not
/// partition `points`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::hull::convex_hull;
/// use u_tour::constructive::cheapest_insertion;
///
/// let points = vec![
///     Point::new(0, 0, 0),
///     Point::new(1, 4, 0),
///     Point::new(2, 4, 3),
///     Point::new(3, 0, 3),
/// ];
/// let hull = convex_hull(&points).unwrap();
/// let tour = cheapest_insertion(&points, &hull).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert!((tour.length() - 14.0).abs() < 1e-10);
/// ```
pub fn cheapest_insertion(points: &[Point], hull: &ConvexHull) -> Result<Tour> {
    if points.is_empty() {
        return Err(TourError::invalid_input("cannot build a tour over no points"));
    }
    check_partition(points.len(), hull)?;

    let distances = DistanceMatrix::from_points(points);
    let mut cycle: Vec<usize> = hull.vertices().to_vec();
    let mut remaining: Vec<usize> = hull.interior().to_vec();
    remaining.sort_unstable();

    log::debug!(
        "cheapest_insertion: start hull={} remaining={}",
        cycle.len(),
        remaining.len()
    );

    while !remaining.is_empty() {
        let (edge, slot, cost) = cheapest_move(&cycle, &remaining, &distances)
            .ok_or_else(|| TourError::invalid_input("tour has no edges to insert into"))?;
        let c = remaining.remove(slot);
        cycle.insert(edge + 1, c);
        log::trace!(
            "cheapest_insertion: insert id={} edge={edge} cost={cost:.4}",
            points[c].id()
        );
    }

    let tour = Tour::from_cycle(points, &cycle);
    log::debug!(
        "cheapest_insertion: done n={} length={:.4}",
        tour.len(),
        tour.length()
    );
    Ok(tour)
}

/// Computes the convex hull and grows it into a tour in one call.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::constructive::cheapest_insertion_tour;
///
/// let points = vec![
///     Point::new(0, 0, 0),
///     Point::new(1, 10, 0),
///     Point::new(2, 10, 10),
///     Point::new(3, 0, 10),
///     Point::new(4, 5, 1),
/// ];
/// let tour = cheapest_insertion_tour(&points).unwrap();
/// assert_eq!(tour.len(), 5);
/// ```
pub fn cheapest_insertion_tour(points: &[Point]) -> Result<Tour> {
    let hull = convex_hull(points)?;
    cheapest_insertion(points, &hull)
}

/// Finds the globally cheapest `(edge index, remaining slot, cost)`.
///
/// Returns `None` if either the cycle or the remaining set is empty.
fn cheapest_move(
    cycle: &[usize],
    remaining: &[usize],
    distances: &DistanceMatrix,
) -> Option<(usize, usize, f64)> {
    let k = cycle.len();
    let mut best: Option<(usize, usize, f64)> = None;

    for e in 0..k {
        let a = cycle[e];
        let b = cycle[(e + 1) % k];

        let mut edge_best: Option<(usize, f64)> = None;
        for (slot, &c) in remaining.iter().enumerate() {
            let cost = distances.insertion_cost(a, b, c);
            if edge_best.map_or(true, |(_, bc)| cost < bc) {
                edge_best = Some((slot, cost));
            }
        }

        if let Some((slot, cost)) = edge_best {
            if best.map_or(true, |(_, _, bc)| cost < bc) {
                best = Some((e, slot, cost));
            }
        }
    }

    best
}

/// Verifies that hull vertices and interior cover `0..n` exactly once.
fn check_partition(n: usize, hull: &ConvexHull) -> Result<()> {
    let mut seen = vec![false; n];
    for &i in hull.vertices().iter().chain(hull.interior()) {
        match seen.get_mut(i) {
            Some(slot) if !*slot => *slot = true,
            Some(_) => {
                return Err(TourError::invalid_input(format!(
                    "position {i} appears twice in hull and interior"
                )))
            }
            None => {
                return Err(TourError::invalid_input(format!(
                    "position {i} is out of bounds for {n} points"
                )))
            }
        }
    }
    if let Some(missing) = seen.iter().position(|&s| !s) {
        return Err(TourError::invalid_input(format!(
            "position {missing} is neither on the hull nor interior"
        )));
    }
    Ok(())
}
