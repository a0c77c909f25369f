//! Exhaustive optimal tour search.
//!
//! # Algorithm
//!
//! Starting from the identity ordering, step through every permutation of
//! point positions with [`next_permutation`] and keep the shortest closed
//! tour. Rotations and reflections of the same cycle are not pruned, so all
//! n! orderings are visited.
//!
//! In parallel mode each first element gets its own rayon task that walks
//! the permutations of the remaining suffix. Every task sees its range in
//! lexicographic order and the merge prefers the lowest first element on
//! equal length, so both modes report the same tour.
//!
//! # Complexity
//!
//! O(n!·n). Use [`permutation_count`] and a time limit or
//! [`CancelToken`] for anything beyond ~10 points.

use std::time::Instant;

use rayon::prelude::*;

use super::config::{BruteForceConfig, CancelToken};
use super::permutation::{next_permutation, permutation_count};
use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::models::{validate_points, Point, Tour};

/// Result of a brute-force search.
///
/// When the search was stopped early, `tour()` is the best candidate seen
/// so far and [`is_complete`](Self::is_complete) is `false`.
#[derive(Debug, Clone)]
pub struct OptimalTour {
    tour: Tour,
    complete: bool,
    permutations_visited: u64,
}

impl OptimalTour {
    /// Best tour found.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Length of the best tour found.
    pub fn length(&self) -> f64 {
        self.tour.length()
    }

    /// `true` if every permutation was evaluated, so the tour is optimal.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of permutations evaluated.
    pub fn permutations_visited(&self) -> u64 {
        self.permutations_visited
    }

    /// Returns the tour if the search finished.
    ///
    /// # Errors
    ///
    /// [`TourError::SearchAborted`] carrying the best candidate otherwise.
    pub fn into_complete(self) -> Result<Tour> {
        if self.complete {
            Ok(self.tour)
        } else {
            Err(TourError::SearchAborted {
                best: Box::new(self.tour),
                permutations_visited: self.permutations_visited,
            })
        }
    }
}

/// Finds the shortest closed tour by trying every ordering of `points`.
///
/// The search stops early when `cancel` is set or the configured time limit
/// passes; the result then reports `is_complete() == false`.
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
/// use u_tour::exact::{brute_force, BruteForceConfig, CancelToken};
///
/// let points = vec![
///     Point::new(0, 0, 0),
///     Point::new(1, 4, 3),
///     Point::new(2, 4, 0),
///     Point::new(3, 0, 3),
/// ];
/// let best = brute_force(&points, &BruteForceConfig::default(), &CancelToken::new()).unwrap();
/// assert!(best.is_complete());
/// assert!((best.length() - 14.0).abs() < 1e-10);
/// assert_eq!(best.permutations_visited(), 24);
/// ```
pub fn brute_force(
    points: &[Point],
    config: &BruteForceConfig,
    cancel: &CancelToken,
) -> Result<OptimalTour> {
    validate_points(points)?;
    let n = points.len();
    let distances = DistanceMatrix::from_points(points);

    match permutation_count(n) {
        Some(count) => log::info!(
            "brute_force: start n={n} permutations={count} parallel={}",
            config.parallel()
        ),
        None => log::warn!("brute_force: start n={n} permutations>u64::MAX; expect to hit the limit"),
    }

    let search = Search {
        distances: &distances,
        deadline: config.time_limit().map(|limit| Instant::now() + limit),
        cancel,
        check_interval: config.check_interval(),
    };

    let best = if config.parallel() {
        (0..n)
            .into_par_iter()
            .map(|first| {
                let mut order = Vec::with_capacity(n);
                order.push(first);
                order.extend((0..n).filter(|&i| i != first));
                search.run(order, 1)
            })
            .collect::<Vec<_>>()
            .into_iter()
            .reduce(Best::merge)
            .ok_or_else(|| TourError::invalid_input("no points to search"))?
    } else {
        search.run((0..n).collect(), 0)
    };

    if best.complete {
        log::info!(
            "brute_force: done visited={} length={:.4}",
            best.visited,
            best.length
        );
    } else {
        log::warn!(
            "brute_force: aborted visited={} best_length={:.4}",
            best.visited,
            best.length
        );
    }

    Ok(OptimalTour {
        tour: Tour::from_cycle(points, &best.order),
        complete: best.complete,
        permutations_visited: best.visited,
    })
}

struct Search<'a> {
    distances: &'a DistanceMatrix,
    deadline: Option<Instant>,
    cancel: &'a CancelToken,
    check_interval: u64,
}

impl Search<'_> {
    fn should_stop(&self, visited: u64) -> bool {
        if self.cancel.is_cancelled() {
            return true;
        }
        match self.deadline {
            Some(deadline) if visited % self.check_interval == 0 => Instant::now() >= deadline,
            _ => false,
        }
    }

    /// Evaluates `order` and every lexicographic successor of `order[fixed..]`.
    fn run(&self, mut order: Vec<usize>, fixed: usize) -> Best {
        let mut best = Best {
            length: self.distances.cycle_length(&order),
            order: order.clone(),
            visited: 1,
            complete: true,
        };

        while next_permutation(&mut order[fixed..]) {
            if self.should_stop(best.visited) {
                best.complete = false;
                break;
            }
            best.visited += 1;
            let length = self.distances.cycle_length(&order);
            if length < best.length {
                best.length = length;
                best.order.copy_from_slice(&order);
            }
        }

        best
    }
}

#[derive(Debug)]
struct Best {
    order: Vec<usize>,
    length: f64,
    visited: u64,
    complete: bool,
}

impl Best {
    /// Combines two disjoint ranges; `self` is the lexicographically earlier one.
    fn merge(self, other: Best) -> Best {
        let visited = self.visited + other.visited;
        let complete = self.complete && other.complete;
        let mut winner = if other.length < self.length { other } else { self };
        winner.visited = visited;
        winner.complete = complete;
        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::cheapest_insertion_tour;
    use crate::evaluation::validate_tour;
    use std::time::Duration;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(i, x, y))
            .collect()
    }

    fn run(points: &[Point], config: &BruteForceConfig) -> OptimalTour {
        brute_force(points, config, &CancelToken::new()).expect("valid input")
    }

    #[test]
    fn test_square_optimum() {
        let points = pts(&[(0, 0), (4, 0), (4, 3), (0, 3)]);
        let best = run(&points, &BruteForceConfig::default());
        assert!(best.is_complete());
        assert!((best.length() - 14.0).abs() < 1e-10);
        assert_eq!(best.permutations_visited(), 24);
        // Identity order is already optimal and found first.
        assert_eq!(best.tour().vertex_ids(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_fixes_crossing_order() {
        // Input order 0,1,2,3 crosses; optimum is the rectangle.
        let points = pts(&[(0, 0), (4, 3), (4, 0), (0, 3)]);
        let best = run(&points, &BruteForceConfig::default());
        assert!((best.length() - 14.0).abs() < 1e-10);
        assert_eq!(best.tour().vertex_ids(), vec![0, 2, 1, 3]);
        validate_tour(best.tour(), &points).expect("valid");
    }

    #[test]
    fn test_not_worse_than_insertion() {
        let points = pts(&[(0, 0), (9, 1), (7, 8), (1, 6), (4, 4), (6, 3), (3, 1)]);
        let best = run(&points, &BruteForceConfig::default());
        let heuristic = cheapest_insertion_tour(&points).expect("tour");
        assert!(best.length() <= heuristic.length() + 1e-9);
        validate_tour(best.tour(), &points).expect("valid");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let points = pts(&[(0, 0), (9, 1), (7, 8), (1, 6), (4, 4), (6, 3), (3, 1)]);
        let seq = run(&points, &BruteForceConfig::default());
        let par = run(&points, &BruteForceConfig::default().with_parallel(true));
        assert!(par.is_complete());
        assert_eq!(seq.length(), par.length());
        assert_eq!(seq.tour().vertex_ids(), par.tour().vertex_ids());
        assert_eq!(seq.permutations_visited(), par.permutations_visited());
        assert_eq!(seq.permutations_visited(), 5040);
    }

    #[test]
    fn test_pre_cancelled() {
        let points = pts(&[(0, 0), (4, 3), (4, 0), (0, 3), (2, 1)]);
        let cancel = CancelToken::new();
        cancel.cancel();
        let best = brute_force(&points, &BruteForceConfig::default(), &cancel).expect("valid");
        assert!(!best.is_complete());
        assert_eq!(best.permutations_visited(), 1);
        // Best-so-far is the identity tour.
        assert_eq!(best.tour().vertex_ids(), vec![0, 1, 2, 3, 4]);
        validate_tour(best.tour(), &points).expect("still a valid tour");

        match best.into_complete() {
            Err(TourError::SearchAborted {
                best,
                permutations_visited,
            }) => {
                assert_eq!(permutations_visited, 1);
                assert_eq!(best.len(), 5);
            }
            other => panic!("expected SearchAborted, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_time_limit_aborts() {
        let points = pts(&[(0, 0), (4, 3), (4, 0), (0, 3), (2, 1), (5, 5)]);
        let config = BruteForceConfig::default()
            .with_time_limit(Duration::ZERO)
            .with_check_interval(1);
        let best = run(&points, &config);
        assert!(!best.is_complete());
        assert!(best.permutations_visited() < 720);
    }

    #[test]
    fn test_zero_time_limit_parallel_aborts() {
        let points = pts(&[(0, 0), (4, 3), (4, 0), (0, 3), (2, 1), (5, 5)]);
        let config = BruteForceConfig::default()
            .with_time_limit(Duration::ZERO)
            .with_check_interval(1)
            .with_parallel(true);
        let best = run(&points, &config);
        assert!(!best.is_complete());
        // One evaluated starting order per task.
        assert_eq!(best.permutations_visited(), 6);
    }

    #[test]
    fn test_generous_limit_completes() {
        let points = pts(&[(0, 0), (4, 3), (4, 0), (0, 3), (2, 1)]);
        let config = BruteForceConfig::default().with_time_limit(Duration::from_secs(60));
        let best = run(&points, &config);
        assert!(best.is_complete());
        assert_eq!(best.permutations_visited(), 120);
        assert!(best.into_complete().is_ok());
    }

    #[test]
    fn test_invalid_input() {
        let points = pts(&[(0, 0), (1, 1)]);
        let result = brute_force(&points, &BruteForceConfig::default(), &CancelToken::new());
        assert!(matches!(result, Err(TourError::InvalidInput(_))));
    }

    #[test]
    fn test_merge_prefers_earlier_on_tie() {
        let a = Best {
            order: vec![0, 1, 2],
            length: 10.0,
            visited: 2,
            complete: true,
        };
        let b = Best {
            order: vec![1, 0, 2],
            length: 10.0,
            visited: 3,
            complete: false,
        };
        let merged = a.merge(b);
        assert_eq!(merged.order, vec![0, 1, 2]);
        assert_eq!(merged.visited, 5);
        assert!(!merged.complete);
    }
}
