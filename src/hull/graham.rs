//! Graham scan convex hull.
//!
//! # Algorithm
//!
//! 1. Pick the pivot: lowest y, ties broken by highest x.
//! 2. Compute every other point's polar angle around the pivot and sort
//!    ascending with [`quicksort_by`].
//! 3. Points on the same ray from the pivot are reordered nearest-first.
//! 4. Scan with a stack seeded `[farthest-angle point, pivot]`, popping
//!    while the top two entries and the candidate fail a strict left turn.
//!
//! Points that lie exactly on a hull edge fail the strict test and end up
//! interior, so every hull vertex is a true corner.
//!
//! # Complexity
//!
//! O(n log n) expected (dominated by the angle sort).
//!
//! # Reference
//!
//! Graham, R.L. (1972). "An Efficient Algorithm for Determining the Convex
//! Hull of a Finite Planar Set", *Information Processing Letters* 1(4),
//! 132-133.

use std::cmp::Ordering;

use crate::error::{Result, TourError};
use crate::models::{validate_points, Coord, Edge, Point, Tour};
use crate::sorting::{insertion_sort_by, quicksort_by};

/// Convex hull of a point set, plus the points strictly inside it.
///
/// Vertices and interior points are positions into the slice the hull was
/// computed from. Vertices run counter-clockwise starting at the pivot;
/// `edges()[i]` joins `vertices()[i]` to the next vertex, wrapping around.
#[derive(Debug, Clone)]
pub struct ConvexHull {
    vertices: Vec<usize>,
    edges: Vec<Edge>,
    interior: Vec<usize>,
    degenerate: bool,
}

impl ConvexHull {
    /// Hull vertex positions, counter-clockwise from the pivot.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Boundary edges in walking order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Positions of points not on the hull, ascending.
    pub fn interior(&self) -> &[usize] {
        &self.interior
    }

    /// Position of the pivot (lowest y, then highest x).
    pub fn pivot(&self) -> usize {
        self.vertices[0]
    }

    /// Number of hull vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the hull has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if every input point is collinear.
    ///
    /// The hull is then the segment between the pivot and the farthest
    /// point, walked out and back (two edges).
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Rejects a degenerate hull with [`TourError::DegenerateGeometry`].
    pub fn ensure_proper(&self) -> Result<&Self> {
        if self.degenerate {
            return Err(TourError::DegenerateGeometry {
                points: self.vertices.len() + self.interior.len(),
            });
        }
        Ok(self)
    }

    /// Total boundary length.
    pub fn perimeter(&self) -> f64 {
        self.edges.iter().map(Edge::distance).sum()
    }

    /// The boundary as a closed tour over the hull vertices only.
    pub fn to_tour(&self) -> Tour {
        Tour::from_edges(self.edges.clone())
    }

    /// Interior points, resolved against the slice the hull came from.
    pub fn interior_points<'a>(
        &'a self,
        points: &'a [Point],
    ) -> impl Iterator<Item = &'a Point> {
        self.interior.iter().map(move |&i| &points[i])
    }
}

/// 2-D cross product of `a - o` and `b - o`.
///
/// Positive when `o → a → b` turns counter-clockwise, zero when collinear.
pub fn cross(o: Coord, a: Coord, b: Coord) -> i128 {
    let ax = i128::from(a.x) - i128::from(o.x);
    let ay = i128::from(a.y) - i128::from(o.y);
    let bx = i128::from(b.x) - i128::from(o.x);
    let by = i128::from(b.y) - i128::from(o.y);
    ax * by - ay * bx
}

/// Polar angle of `p` around `origin` in degrees, in `[0, 360)`.
///
/// Uses the full-circle arctangent, so all four quadrants and both axes map
/// to distinct angles.
///
/// # Examples
///
/// ```
/// use u_tour::models::Coord;
/// use u_tour::hull::polar_angle;
///
/// let o = Coord::new(0, 0);
/// assert!((polar_angle(o, Coord::new(1, 0)) - 0.0).abs() < 1e-10);
/// assert!((polar_angle(o, Coord::new(0, 1)) - 90.0).abs() < 1e-10);
/// assert!((polar_angle(o, Coord::new(-1, 0)) - 180.0).abs() < 1e-10);
/// assert!((polar_angle(o, Coord::new(0, -1)) - 270.0).abs() < 1e-10);
/// ```
pub fn polar_angle(origin: Coord, p: Coord) -> f64 {
    let dx = f64::from(p.x) - f64::from(origin.x);
    let dy = f64::from(p.y) - f64::from(origin.y);
    let degrees = dy.atan2(dx).to_degrees();
    let normalized = if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    };
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Position of the lowest point, ties going to the rightmost.
///
/// Returns `None` for an empty slice.
pub fn find_pivot(points: &[Point]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.y().cmp(&b.y()).then_with(|| b.x().cmp(&a.x())))
        .map(|(i, _)| i)
}

/// Computes the convex hull of a point set with Graham's scan.
///
/// # Errors
///
/// [`TourError::InvalidInput`] if there are fewer than three points or the
/// set contains duplicate coordinates or ids.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::hull::convex_hull;
///
/// let points = vec![
///     Point::new(0, 0, 0),
///     Point::new(1, 4, 0),
///     Point::new(2, 4, 3),
///     Point::new(3, 0, 3),
///     Point::new(4, 2, 1),
/// ];
/// let hull = convex_hull(&points).unwrap();
/// assert_eq!(hull.vertices(), &[1, 2, 3, 0]);
/// assert_eq!(hull.interior(), &[4]);
/// assert!((hull.perimeter() - 14.0).abs() < 1e-10);
/// ```
pub fn convex_hull(points: &[Point]) -> Result<ConvexHull> {
    validate_points(points)?;
    let n = points.len();
    let pivot = find_pivot(points)
        .ok_or_else(|| TourError::invalid_input("cannot pick a pivot from an empty set"))?;
    let origin = points[pivot].coord();

    // Per-call scratch tables indexed by position.
    let mut angle = vec![0.0_f64; n];
    let mut radius = vec![0.0_f64; n];
    let mut order: Vec<usize> = (0..n).filter(|&i| i != pivot).collect();
    for &i in &order {
        angle[i] = polar_angle(origin, points[i].coord());
        radius[i] = origin.distance_to(points[i].coord());
    }

    quicksort_by(&mut order, |&a, &b| angle[a].total_cmp(&angle[b]));
    resolve_angle_ties(points, origin, &angle, &radius, &mut order);

    let first = order[0];
    let last = order[order.len() - 1];

    if cross(origin, points[first].coord(), points[last].coord()) == 0 {
        log::debug!(
            "hull: degenerate n={n} pivot={} far={}",
            points[pivot].id(),
            points[last].id()
        );
        let vertices = vec![pivot, last];
        let interior = order[..order.len() - 1].to_vec();
        return Ok(build_hull(points, vertices, interior, true));
    }

    let mut stack = vec![last, pivot];
    for (k, &candidate) in order.iter().enumerate() {
        while stack.len() > 2 {
            let top = stack[stack.len() - 1];
            let below = stack[stack.len() - 2];
            if is_left_turn(points, below, top, candidate) {
                break;
            }
            stack.pop();
        }
        // The farthest-angle point already sits at the bottom.
        if k + 1 < order.len() {
            stack.push(candidate);
        }
    }

    let mut on_hull = vec![false; n];
    for &v in &stack {
        on_hull[v] = true;
    }
    let interior: Vec<usize> = (0..n).filter(|&i| !on_hull[i]).collect();

    let mut vertices = stack.split_off(1);
    vertices.push(last);

    log::debug!(
        "hull: done n={n} pivot={} hull={} interior={}",
        points[pivot].id(),
        vertices.len(),
        interior.len()
    );

    Ok(build_hull(points, vertices, interior, false))
}

/// Reorders runs of points on a common ray from the pivot nearest-first.
///
/// A run is a maximal stretch of neighbours whose angles compare equal or
/// whose integer cross product with the pivot is zero. Inside a run the
/// exact orientation decides, then distance.
fn resolve_angle_ties(
    points: &[Point],
    origin: Coord,
    angle: &[f64],
    radius: &[f64],
    order: &mut [usize],
) {
    let tied = |a: usize, b: usize| {
        angle[a] == angle[b] || cross(origin, points[a].coord(), points[b].coord()) == 0
    };

    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && tied(order[end - 1], order[end]) {
            end += 1;
        }
        if end - start > 1 {
            insertion_sort_by(&mut order[start..end], |&a, &b| {
                match cross(origin, points[a].coord(), points[b].coord()) {
                    c if c > 0 => Ordering::Less,
                    c if c < 0 => Ordering::Greater,
                    _ => radius[a].total_cmp(&radius[b]),
                }
            });
        }
        start = end;
    }
}

fn is_left_turn(points: &[Point], a: usize, b: usize, c: usize) -> bool {
    cross(points[a].coord(), points[b].coord(), points[c].coord()) > 0
}

fn build_hull(
    points: &[Point],
    vertices: Vec<usize>,
    interior: Vec<usize>,
    degenerate: bool,
) -> ConvexHull {
    let k = vertices.len();
    let edges = (0..k)
        .map(|i| Edge::new(&points[vertices[i]], &points[vertices[(i + 1) % k]]))
        .collect();
    let mut interior = interior;
    interior.sort_unstable();
    ConvexHull {
        vertices,
        edges,
        interior,
        degenerate,
    }
}
