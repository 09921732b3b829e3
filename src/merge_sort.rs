//! Top-down merge sort.
//!
//! Each level allocates the merged output, so the sort costs O(n) extra space
//! and O(n log n) comparisons.

use tracing::trace;

use crate::complexity::{Complexity, Growth};
use crate::Sorter;

/// Merge sort behind the [`Sorter`] seam. Sorts into a fresh buffer and copies
/// the result back over the input slice.
pub struct MergeSorter;

impl Sorter for MergeSorter {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn sort<T: Ord + Clone>(&self, data: &mut [T]) {
        let sorted = merge_sort(data);
        data.clone_from_slice(&sorted);
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Growth::Linearithmic, Growth::Linear)
    }
}

/// Returns a sorted copy of `data`.
///
/// The left half takes the first `len / 2` elements. Ties are resolved in
/// favour of the left half, so the sort is stable.
///
/// ```
/// use textbook_sorts::merge_sort;
///
/// assert_eq!(merge_sort(&[5, 2, 8, 3, 1, 4, 6]), vec![1, 2, 3, 4, 5, 6, 8]);
/// ```
pub fn merge_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    if data.len() <= 1 {
        return data.to_vec();
    }

    let mid = data.len() / 2;
    trace!(len = data.len(), mid, "split");
    let left = merge_sort(&data[..mid]);
    let right = merge_sort(&data[mid..]);
    merge(&left, &right)
}

/// Merges two sorted slices into one sorted vector, taking from `left` on ties.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            result.push(left[i].clone());
            i += 1;
        } else {
            result.push(right[j].clone());
            j += 1;
        }
    }
    // At most one of these is non-empty.
    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);

    trace!(left = left.len(), right = right.len(), "merged");
    result
}
