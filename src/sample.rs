//! The two demonstration scripts: a fixed input, one sort, one printed line.

use tracing::debug;

use crate::complexity::Complexity;
use crate::input::format_sequence;
use crate::{bubble_sort, merge_sort, BubbleSorter, MergeSorter, Sorter};

pub const MERGE_SORT_SAMPLE: [i64; 7] = [5, 2, 8, 3, 1, 4, 6];
pub const BUBBLE_SORT_SAMPLE: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

/// Label printed before the bubble sort result.
pub const BUBBLE_SORT_LABEL: &str = "Sorted array:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    MergeSort,
    BubbleSort,
}

impl Script {
    pub const ALL: [Script; 2] = [Script::MergeSort, Script::BubbleSort];

    pub fn sample_input(self) -> Vec<i64> {
        match self {
            Script::MergeSort => MERGE_SORT_SAMPLE.to_vec(),
            Script::BubbleSort => BUBBLE_SORT_SAMPLE.to_vec(),
        }
    }

    pub fn complexity(self) -> Complexity {
        match self {
            Script::MergeSort => MergeSorter.complexity(),
            Script::BubbleSort => BubbleSorter.complexity(),
        }
    }

    /// Sorts `data` and returns the line the script prints.
    pub fn run(self, data: Vec<i64>) -> String {
        debug!(script = ?self, len = data.len(), "running script");
        match self {
            Script::MergeSort => format_sequence(&merge_sort(&data)),
            Script::BubbleSort => {
                let mut numbers = data;
                bubble_sort(&mut numbers);
                format!("{} {}", BUBBLE_SORT_LABEL, format_sequence(&numbers))
            }
        }
    }

    /// Runs the script on its hardcoded sample.
    pub fn run_sample(self) -> String {
        self.run(self.sample_input())
    }
}
