/// Rearranges `values` into its lexicographic successor.
///
/// Returns `false` and leaves `values` untouched if it is already the last
/// arrangement, i.e. sorted in non-increasing order. Starting from the
/// ascending arrangement of a multiset, repeated calls visit every distinct
/// arrangement exactly once.
///
/// ```rust
/// use vertex_coloring::permutation::next_permutation;
///
/// let mut coloring = [0, 0, 1];
/// assert!(next_permutation(&mut coloring));
/// assert_eq!(coloring, [0, 1, 0]);
/// assert!(next_permutation(&mut coloring));
/// assert_eq!(coloring, [1, 0, 0]);
/// assert!(!next_permutation(&mut coloring));
/// ```
pub fn next_permutation<T: Ord>(values: &mut [T]) -> bool {
    // The pivot is the last position followed by a strictly larger value.
    // Everything to its right is non-increasing.
    let Some(pivot) = values.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    // The value right after the pivot is larger, so the search never falls back.
    let successor = pivot + 1 + values[pivot + 1..].iter().rposition(|v| *v > values[pivot]).unwrap_or(0);
    values.swap(pivot, successor);
    values[pivot + 1..].reverse();
    true
}
