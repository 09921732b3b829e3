//! Property-based tests for the textbook sorts
//!
//! Both sorts are checked against the standard library on random inputs,
//! which covers ordering, permutation and length in one comparison.

use proptest::prelude::*;
use textbook_sorts::{bubble_sort, is_sorted, merge, merge_sort};

// =============================================================================
// Merge Sort Properties
// =============================================================================

proptest! {
    #[test]
    fn merge_sort_matches_std(data in prop::collection::vec(any::<i64>(), 0..200)) {
        let mut expected = data.clone();
        expected.sort();
        prop_assert_eq!(merge_sort(&data), expected);
    }

    #[test]
    fn merge_sort_is_idempotent(data in prop::collection::vec(-50i32..50, 0..100)) {
        let once = merge_sort(&data);
        prop_assert_eq!(merge_sort(&once), once);
    }

    #[test]
    fn merge_of_sorted_halves_is_sorted(
        left in prop::collection::vec(-100i32..100, 0..50),
        right in prop::collection::vec(-100i32..100, 0..50),
    ) {
        let (mut left, mut right) = (left, right);
        left.sort();
        right.sort();
        let merged = merge(&left, &right);
        prop_assert_eq!(merged.len(), left.len() + right.len());
        prop_assert!(is_sorted(&merged));
    }
}

// =============================================================================
// Bubble Sort Properties
// =============================================================================

proptest! {
    #[test]
    fn bubble_sort_matches_std(data in prop::collection::vec(any::<i64>(), 0..100)) {
        let mut expected = data.clone();
        expected.sort();
        let mut actual = data;
        bubble_sort(&mut actual);
        prop_assert_eq!(actual, expected);
    }

    /// Pairs compare on the key only; the stable std sort gives the expected
    /// order of positions among equal keys.
    #[test]
    fn bubble_sort_is_stable(keys in prop::collection::vec(0u8..4, 0..60)) {
        let mut data: Vec<ByKey> = keys.iter().enumerate().map(|(pos, &key)| ByKey { key, pos }).collect();
        let mut expected: Vec<(u8, usize)> = data.iter().map(|d| (d.key, d.pos)).collect();
        expected.sort_by_key(|&(key, _)| key);

        bubble_sort(&mut data);
        let actual: Vec<(u8, usize)> = data.iter().map(|d| (d.key, d.pos)).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn both_sorts_agree(data in prop::collection::vec(-20i32..20, 0..80)) {
        let mut bubbled = data.clone();
        bubble_sort(&mut bubbled);
        prop_assert_eq!(merge_sort(&data), bubbled);
    }
}

#[derive(Debug)]
struct ByKey {
    key: u8,
    pos: usize,
}

impl PartialEq for ByKey {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for ByKey {}

impl PartialOrd for ByKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}
