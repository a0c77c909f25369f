//! Weighted edge between two points.

use serde::{Deserialize, Serialize};

use super::{Coord, Point};

/// An undirected edge between two points.
///
/// Stores both endpoints' ids and coordinates so the edge can be drawn or
/// inspected without the originating point slice. The Euclidean length is
/// computed once at construction.
///
/// Equality ignores direction: `(a, b)` equals `(b, a)`.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Edge, Point};
///
/// let a = Point::new(0, 0, 0);
/// let b = Point::new(1, 3, 4);
/// let e = Edge::new(&a, &b);
/// assert!((e.distance() - 5.0).abs() < 1e-10);
/// assert_eq!(e, Edge::new(&b, &a));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    a: usize,
    b: usize,
    a_coord: Coord,
    b_coord: Coord,
    distance: f64,
}

impl Edge {
    /// Creates the edge `a → b`.
    pub fn new(a: &Point, b: &Point) -> Self {
        Self {
            a: a.id(),
            b: b.id(),
            a_coord: a.coord(),
            b_coord: b.coord(),
            distance: a.distance_to(b),
        }
    }

    /// Id of the first endpoint.
    pub fn a(&self) -> usize {
        self.a
    }

    /// Id of the second endpoint.
    pub fn b(&self) -> usize {
        self.b
    }

    /// Coordinates of both endpoints, in construction order.
    pub fn coords(&self) -> (Coord, Coord) {
        (self.a_coord, self.b_coord)
    }

    /// Euclidean length.
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}
