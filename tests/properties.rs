//! Property tests across the hull, insertion, and brute-force solvers.

use proptest::prelude::*;

use u_tour::constructive::cheapest_insertion;
use u_tour::evaluation::validate_tour;
use u_tour::exact::{brute_force, BruteForceConfig, CancelToken};
use u_tour::hull::{convex_hull, cross};
use u_tour::models::Point;
use u_tour::sorting::quicksort_by;

fn point_set(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::hash_set((-30_i32..30, -30_i32..30), 3..=max).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| Point::new(i, x, y))
            .collect()
    })
}

/// Shortest cycle by depth-first search over orderings that start at
/// position 0, independent of the lexicographic enumerator.
fn reference_optimum(points: &[Point]) -> f64 {
    fn dfs(points: &[Point], path: &mut Vec<usize>, used: &mut [bool], len: f64, best: &mut f64) {
        if path.len() == points.len() {
            let last = path[path.len() - 1];
            let total = len + points[last].distance_to(&points[path[0]]);
            if total < *best {
                *best = total;
            }
            return;
        }
        let last = path[path.len() - 1];
        for next in 0..points.len() {
            if used[next] {
                continue;
            }
            used[next] = true;
            path.push(next);
            dfs(
                points,
                path,
                used,
                len + points[last].distance_to(&points[next]),
                best,
            );
            path.pop();
            used[next] = false;
        }
    }

    let mut used = vec![false; points.len()];
    used[0] = true;
    let mut best = f64::INFINITY;
    dfs(points, &mut vec![0], &mut used, 0.0, &mut best);
    best
}

proptest! {
    #[test]
    fn hull_partitions_points(points in point_set(25)) {
        let hull = convex_hull(&points).unwrap();
        let mut seen = vec![0_u32; points.len()];
        for &i in hull.vertices().iter().chain(hull.interior()) {
            seen[i] += 1;
        }
        prop_assert!(seen.iter().all(|&c| c == 1));
        prop_assert_eq!(hull.edges().len(), hull.vertices().len());
    }

    #[test]
    fn hull_is_convex_and_encloses(points in point_set(25)) {
        let hull = convex_hull(&points).unwrap();
        let v = hull.vertices();
        let k = v.len();
        if !hull.is_degenerate() {
            prop_assert!(k >= 3);
            for i in 0..k {
                let a = points[v[i]].coord();
                let b = points[v[(i + 1) % k]].coord();
                let c = points[v[(i + 2) % k]].coord();
                prop_assert!(cross(a, b, c) > 0);
            }
        } else {
            prop_assert_eq!(k, 2);
        }
        for i in 0..k {
            let a = points[v[i]].coord();
            let b = points[v[(i + 1) % k]].coord();
            for p in &points {
                prop_assert!(cross(a, b, p.coord()) >= 0);
            }
        }
    }

    #[test]
    fn insertion_is_hamiltonian(points in point_set(25)) {
        let hull = convex_hull(&points).unwrap();
        let tour = cheapest_insertion(&points, &hull).unwrap();
        prop_assert_eq!(tour.len(), points.len());
        prop_assert!(validate_tour(&tour, &points).is_ok());
        prop_assert!(tour.length() >= hull.perimeter() - 1e-9);
    }

    #[test]
    fn quicksort_matches_std(mut v in prop::collection::vec(-1000_i32..1000, 0..200)) {
        let mut expected = v.clone();
        expected.sort();
        quicksort_by(&mut v, |a, b| a.cmp(b));
        prop_assert_eq!(v, expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn brute_force_is_optimal(points in point_set(8)) {
        let best = brute_force(&points, &BruteForceConfig::default(), &CancelToken::new()).unwrap();
        prop_assert!(best.is_complete());
        prop_assert!(validate_tour(best.tour(), &points).is_ok());
        prop_assert!((best.length() - reference_optimum(&points)).abs() < 1e-9);

        let hull = convex_hull(&points).unwrap();
        let heuristic = cheapest_insertion(&points, &hull).unwrap();
        prop_assert!(best.length() <= heuristic.length() + 1e-9);
    }

    #[test]
    fn parallel_matches_sequential(points in point_set(7)) {
        let seq = brute_force(&points, &BruteForceConfig::default(), &CancelToken::new()).unwrap();
        let par = brute_force(
            &points,
            &BruteForceConfig::default().with_parallel(true),
            &CancelToken::new(),
        )
        .unwrap();
        prop_assert_eq!(seq.length(), par.length());
        prop_assert_eq!(seq.tour().vertex_ids(), par.tour().vertex_ids());
    }
}
