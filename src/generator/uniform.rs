//! Uniform random point generation.

use std::collections::HashSet;

use rand::Rng;

use crate::error::{Result, TourError};
use crate::models::{Coord, Point, MIN_POINTS};

/// Draws `n` points with pairwise-distinct coordinates from
/// `[0, width) × [0, height)`.
///
/// Points get ids `0..n` in draw order. Repeated coordinates are redrawn.
///
/// # Errors
///
/// [`TourError::InvalidInput`] if `n < 3`, a dimension is not positive, or
/// the grid has fewer than `n` cells.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tour::generator::random_points;
/// use u_tour::models::validate_points;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let points = random_points(8, 100, 100, &mut rng).unwrap();
/// assert_eq!(points.len(), 8);
/// assert!(validate_points(&points).is_ok());
/// ```
pub fn random_points<R: Rng>(
    n: usize,
    width: i32,
    height: i32,
    rng: &mut R,
) -> Result<Vec<Point>> {
    if n < MIN_POINTS {
        return Err(TourError::invalid_input(format!(
            "need at least {MIN_POINTS} points, got {n}"
        )));
    }
    if width <= 0 || height <= 0 {
        return Err(TourError::invalid_input(format!(
            "grid must be positive, got {width}x{height}"
        )));
    }
    let cells = u64::from(width.unsigned_abs()) * u64::from(height.unsigned_abs());
    if (n as u64) > cells {
        return Err(TourError::invalid_input(format!(
            "cannot place {n} distinct points on a {width}x{height} grid"
        )));
    }

    let mut used = HashSet::with_capacity(n);
    let mut points = Vec::with_capacity(n);
    while points.len() < n {
        let coord = Coord::new(rng.random_range(0..width), rng.random_range(0..height));
        if used.insert(coord) {
            points.push(Point::new(points.len(), coord.x, coord.y));
        }
    }

    log::debug!("generator: drew n={n} grid={width}x{height}");
    Ok(points)
}
