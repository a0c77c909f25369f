//! Closed tour type.

use serde::{Deserialize, Serialize};

use super::{Edge, Point};

/// A closed tour: an ordered cycle of edges.
///
/// Edge `i` runs from the `i`-th visited point to the `(i+1)`-th, and the
/// last edge returns to the start. The total length is cached at
/// construction.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Point, Tour};
///
/// let points = vec![
///     Point::new(0, 0, 0),
///     Point::new(1, 4, 0),
///     Point::new(2, 4, 3),
///     Point::new(3, 0, 3),
/// ];
/// let tour = Tour::from_cycle(&points, &[0, 1, 2, 3]);
/// assert_eq!(tour.len(), 4);
/// assert!((tour.length() - 14.0).abs() < 1e-10);
/// assert_eq!(tour.vertex_ids(), vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    edges: Vec<Edge>,
    length: f64,
}

impl Tour {
    /// Builds a tour visiting `points[order[0]], points[order[1]], ...` and
    /// returning to `points[order[0]]`.
    ///
    /// `order` holds positions into `points`. An empty order gives an empty
    /// tour.
    ///
    /// # Panics
    ///
    /// Panics if a position is out of bounds.
    pub fn from_cycle(points: &[Point], order: &[usize]) -> Self {
        let edges = match order.len() {
            0 => Vec::new(),
            n => (0..n)
                .map(|i| Edge::new(&points[order[i]], &points[order[(i + 1) % n]]))
                .collect(),
        };
        Self::from_edges(edges)
    }

    /// Wraps an already ordered edge sequence.
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let length = edges.iter().map(Edge::distance).sum();
        Self { edges, length }
    }

    /// Edges in visiting order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Total tour length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the tour has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Point ids in visiting order (the start of each edge).
    pub fn vertex_ids(&self) -> Vec<usize> {
        self.edges.iter().map(Edge::a).collect()
    }
}
