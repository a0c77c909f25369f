//! In-place comparison sorting.
//!
//! - [`quicksort_by`] — Median-of-three quicksort with insertion-sort cutoff
//! - [`insertion_sort_by`] — Straight insertion sort for short runs

mod quicksort;

pub use quicksort::{insertion_sort_by, quicksort_by, CUTOFF};
