use tracing::debug;

use crate::complexity::{Complexity, Growth};
use crate::Sorter;

/// Classic O(n²) bubble sort
pub struct BubbleSorter;

impl Sorter for BubbleSorter {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn sort<T: Ord + Clone>(&self, data: &mut [T]) {
        bubble_sort(data);
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Growth::Quadratic, Growth::Constant)
    }
}

/// Sorts `data` in place, in non-decreasing order.
///
/// Only strictly out-of-order neighbours are swapped, so equal elements keep
/// their relative order. Stops early once a pass makes no swap.
///
/// ```
/// use textbook_sorts::bubble_sort;
///
/// let mut numbers = [64, 34, 25, 12, 22, 11, 90];
/// bubble_sort(&mut numbers);
/// assert_eq!(numbers, [11, 12, 22, 25, 34, 64, 90]);
/// ```
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    let n = data.len();
    let mut passes = 0usize;
    let mut swaps = 0usize;

    for i in 0..n {
        passes += 1;
        let mut swapped = false;
        // After pass i the last i elements are in their final place.
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
                swaps += 1;
            }
        }
        if !swapped {
            break;
        }
    }

    debug!(len = n, passes, swaps, "bubble sort finished");
}
