//! Hamiltonian-cycle validation.

use std::collections::HashMap;

use crate::error::{Result, TourError};
use crate::models::{Point, Tour};

/// Checks that `tour` is a single closed cycle visiting every point once.
///
/// Verifies, in order:
/// - the tour has exactly one edge per point,
/// - every endpoint id belongs to `points`,
/// - consecutive edges chain head-to-tail and the last edge closes the cycle,
/// - no point is visited twice.
///
/// Together these imply every point is the endpoint of exactly two edges.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, Tour};
/// use u_tour::evaluation::validate_tour;
///
/// let points = vec![Point::new(0, 0, 0), Point::new(1, 2, 0), Point::new(2, 1, 2)];
/// let tour = Tour::from_cycle(&points, &[0, 1, 2]);
/// assert!(validate_tour(&tour, &points).is_ok());
///
/// let short = Tour::from_cycle(&points, &[0, 1]);
/// assert!(validate_tour(&short, &points).is_err());
/// ```
pub fn validate_tour(tour: &Tour, points: &[Point]) -> Result<()> {
    let n = points.len();
    if tour.len() != n {
        return Err(TourError::invalid_input(format!(
            "tour has {} edges for {n} points",
            tour.len()
        )));
    }
    if n == 0 {
        return Ok(());
    }

    let position: HashMap<usize, usize> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id(), i))
        .collect();

    let edges = tour.edges();
    let mut visited = vec![false; n];
    for (i, edge) in edges.iter().enumerate() {
        let pos = *position.get(&edge.a()).ok_or_else(|| {
            TourError::invalid_input(format!("tour visits unknown point id {}", edge.a()))
        })?;
        if !position.contains_key(&edge.b()) {
            return Err(TourError::invalid_input(format!(
                "tour visits unknown point id {}",
                edge.b()
            )));
        }

        let next = &edges[(i + 1) % n];
        if edge.b() != next.a() {
            return Err(TourError::invalid_input(format!(
                "edge {i} ends at {} but edge {} starts at {}",
                edge.b(),
                (i + 1) % n,
                next.a()
            )));
        }

        if visited[pos] {
            return Err(TourError::invalid_input(format!(
                "point id {} visited twice",
                edge.a()
            )));
        }
        visited[pos] = true;
    }

    Ok(())
}
