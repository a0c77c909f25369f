//! Dense distance matrix.

use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Indices are positions in the point slice the matrix was built from, not
/// point ids.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0, 0, 0),
///     Point::new(1, 3, 4),
///     Point::new(2, 6, 8),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the Euclidean distance matrix of a point slice.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance between positions `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Length of the closed cycle `order[0] → order[1] → ... → order[0]`.
    ///
    /// Sums edges in the same order as [`Tour::from_cycle`](crate::models::Tour::from_cycle),
    /// so both report bit-identical lengths for the same order.
    pub fn cycle_length(&self, order: &[usize]) -> f64 {
        let n = order.len();
        if n < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..n {
            total += self.get(order[i], order[(i + 1) % n]);
        }
        total
    }

    /// Marginal cost of splicing `c` between `a` and `b`.
    pub fn insertion_cost(&self, a: usize, b: usize, c: usize) -> f64 {
        self.get(a, c) + self.get(c, b) - self.get(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tour;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0, 0, 0),
            Point::new(1, 3, 4),
            Point::new(2, 0, 8),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_points(&sample_points());
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn test_cycle_length_matches_tour() {
        let pts = vec![
            Point::new(0, 0, 0),
            Point::new(1, 7, 1),
            Point::new(2, 3, 9),
            Point::new(3, -2, 4),
        ];
        let dm = DistanceMatrix::from_points(&pts);
        let order = [2, 0, 3, 1];
        let tour = Tour::from_cycle(&pts, &order);
        assert_eq!(dm.cycle_length(&order), tour.length());
    }

    #[test]
    fn test_cycle_length_short() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.cycle_length(&[]), 0.0);
        assert_eq!(dm.cycle_length(&[1]), 0.0);
    }

    #[test]
    fn test_insertion_cost() {
        let dm = DistanceMatrix::from_points(&sample_points());
        // 0→1→2 = 5 + 5, replacing 0→2 = 8
        assert!((dm.insertion_cost(0, 2, 1) - 2.0).abs() < 1e-10);
    }
}
