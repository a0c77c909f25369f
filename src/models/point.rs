//! Coordinate and point types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};

/// Minimum number of points a solver accepts.
pub const MIN_POINTS: usize = 3;

/// An integer coordinate pair.
///
/// # Examples
///
/// ```
/// use u_tour::models::Coord;
///
/// let a = Coord::new(0, 0);
/// let b = Coord::new(3, 4);
/// assert!((a.distance_to(b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X-coordinate.
    pub x: i32,
    /// Y-coordinate.
    pub y: i32,
}

impl Coord {
    /// Creates a new coordinate pair.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate.
    pub fn distance_to(self, other: Coord) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }
}

/// A point in a working set.
///
/// Coordinates never change after creation. The `id` is the caller's stable
/// identifier and must be unique within a working set; solvers refer to
/// points by their position in the input slice and report ids on output.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
///
/// let p = Point::new(7, 10, 20).with_label("Springfield");
/// assert_eq!(p.id(), 7);
/// assert_eq!(p.x(), 10);
/// assert_eq!(p.label(), Some("Springfield"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    coord: Coord,
    label: Option<String>,
}

impl Point {
    /// Creates an unlabelled point.
    pub fn new(id: usize, x: i32, y: i32) -> Self {
        Self {
            id,
            coord: Coord::new(x, y),
            label: None,
        }
    }

    /// Attaches a display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Coordinate pair.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// X-coordinate.
    pub fn x(&self) -> i32 {
        self.coord.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i32 {
        self.coord.y
    }

    /// Display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.coord.distance_to(other.coord)
    }
}

/// Checks the working-set preconditions shared by every solver.
///
/// Rejects sets with fewer than [`MIN_POINTS`] points, repeated coordinates,
/// or repeated ids.
///
/// # Examples
///
/// ```
/// use u_tour::models::{validate_points, Point};
///
/// let ok = vec![Point::new(0, 0, 0), Point::new(1, 1, 0), Point::new(2, 0, 1)];
/// assert!(validate_points(&ok).is_ok());
///
/// let dup = vec![Point::new(0, 0, 0), Point::new(1, 0, 0), Point::new(2, 0, 1)];
/// assert!(validate_points(&dup).is_err());
/// ```
pub fn validate_points(points: &[Point]) -> Result<()> {
    if points.len() < MIN_POINTS {
        return Err(TourError::invalid_input(format!(
            "need at least {MIN_POINTS} points, got {}",
            points.len()
        )));
    }

    let mut coords = HashSet::with_capacity(points.len());
    let mut ids = HashSet::with_capacity(points.len());
    for p in points {
        if !coords.insert(p.coord()) {
            return Err(TourError::invalid_input(format!(
                "duplicate coordinates ({}, {})",
                p.x(),
                p.y()
            )));
        }
        if !ids.insert(p.id()) {
            return Err(TourError::invalid_input(format!(
                "duplicate point id {}",
                p.id()
            )));
        }
    }
    Ok(())
}
