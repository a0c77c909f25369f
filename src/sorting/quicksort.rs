//! Median-of-three quicksort with an insertion-sort cutoff.
//!
//! # Algorithm
//!
//! The first, middle, and last elements are ordered in place and the median
//! is parked at `right - 1`, which then serves as a sentinel for both
//! partition scans. Slices shorter than [`CUTOFF`] are finished with
//! insertion sort.
//!
//! # Complexity
//!
//! O(n log n) expected, O(n²) worst case. Not stable.
//!
//! # Reference
//!
//! Weiss, M.A. (2012). *Data Structures and Algorithm Analysis in Java*,
//! 3rd ed., §7.7.

use std::cmp::Ordering;

/// Slices with fewer elements than this are sorted by insertion sort.
pub const CUTOFF: usize = 4;

/// Sorts a slice in place, ascending under `compare`.
///
/// # Examples
///
/// ```
/// use u_tour::sorting::quicksort_by;
///
/// let mut v = vec![5, 1, 4, 2, 8, 0, 3, 9, 7, 6];
/// quicksort_by(&mut v, |a, b| a.cmp(b));
/// assert_eq!(v, (0..10).collect::<Vec<_>>());
/// ```
pub fn quicksort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut compare);
}

/// Sorts a slice in place with straight insertion sort.
///
/// Stable, O(n²). Used directly for short runs.
pub fn insertion_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut compare);
}

fn quicksort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < CUTOFF {
        insertion_sort(v, compare);
        return;
    }

    let right = v.len() - 1;
    let pivot = median_of_three(v, compare);

    // v[0] <= pivot and v[pivot] == pivot bound both scans.
    let mut i = 0;
    let mut j = pivot;
    loop {
        i += 1;
        while compare(&v[i], &v[pivot]) == Ordering::Less {
            i += 1;
        }
        j -= 1;
        while compare(&v[j], &v[pivot]) == Ordering::Greater {
            j -= 1;
        }
        if i < j {
            v.swap(i, j);
        } else {
            break;
        }
    }
    v.swap(i, right - 1);

    let (low, high) = v.split_at_mut(i);
    quicksort(low, compare);
    quicksort(&mut high[1..], compare);
}

/// Orders the first, middle, and last elements and moves the median to
/// `len - 2`. Returns that index.
fn median_of_three<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let left = 0;
    let right = v.len() - 1;
    let center = right / 2;

    if compare(&v[center], &v[left]) == Ordering::Less {
        v.swap(left, center);
    }
    if compare(&v[right], &v[left]) == Ordering::Less {
        v.swap(left, right);
    }
    if compare(&v[right], &v[center]) == Ordering::Less {
        v.swap(center, right);
    }

    v.swap(center, right - 1);
    right - 1
}

fn insertion_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for p in 1..v.len() {
        let mut j = p;
        while j > 0 && compare(&v[j], &v[j - 1]) == Ordering::Less {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
