//! Lexicographic permutation enumeration.

/// Rearranges `v` into its lexicographic successor.
///
/// Returns `false` and leaves `v` untouched once `v` is in descending order
/// (the last permutation). Equal elements are handled, so multiset
/// permutations are each produced once.
///
/// # Algorithm
///
/// Find the longest non-increasing suffix; the element before it is the
/// pivot. Swap the pivot with the rightmost suffix element greater than it,
/// then reverse the suffix.
///
/// # Examples
///
/// ```
/// use u_tour::exact::next_permutation;
///
/// let mut v = [0, 1, 2];
/// let mut seen = vec![v];
/// while next_permutation(&mut v) {
///     seen.push(v);
/// }
/// assert_eq!(
///     seen,
///     vec![[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]]
/// );
/// ```
pub fn next_permutation<T: Ord>(v: &mut [T]) -> bool {
    if v.len() < 2 {
        return false;
    }

    let mut i = v.len() - 1;
    while i > 0 && v[i - 1] >= v[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let pivot = i - 1;
    let mut j = v.len() - 1;
    while v[j] <= v[pivot] {
        j -= 1;
    }
    v.swap(pivot, j);
    v[i..].reverse();
    true
}

/// Number of orderings of `n` items, `n!`.
///
/// Returns `None` when the count does not fit in a `u64` (n > 20).
///
/// # Examples
///
/// ```
/// use u_tour::exact::permutation_count;
///
/// assert_eq!(permutation_count(5), Some(120));
/// assert_eq!(permutation_count(20), Some(2_432_902_008_176_640_000));
/// assert_eq!(permutation_count(21), None);
/// ```
pub fn permutation_count(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1_u64, |acc, k| acc.checked_mul(k))
}
