//! Textbook Sorts
//!
//! Merge sort and bubble sort exactly as the textbooks describe them, plus the
//! two sample scripts that run them on a fixed array and print the result.

pub mod baselines;
pub mod bubble_sort;
pub mod cli;
pub mod complexity;
pub mod error;
pub mod input;
pub mod merge_sort;
pub mod sample;

pub use bubble_sort::{bubble_sort, BubbleSorter};
pub use error::{Result, SortError};
pub use merge_sort::{merge, merge_sort, MergeSorter};

use complexity::Complexity;

/// Trait for sorting implementations
pub trait Sorter {
    /// Short name used in logs and benchmark output.
    fn name(&self) -> &'static str;

    /// Sorts `data` into non-decreasing order.
    fn sort<T: Ord + Clone>(&self, data: &mut [T]);

    /// Documented asymptotic time and space cost.
    fn complexity(&self) -> Complexity;
}

/// Installs the stderr `tracing` subscriber used by both binaries.
///
/// `RUST_LOG` wins over `default_filter`. A second call is a no-op.
pub fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .try_init();
}

/// True when every adjacent pair is in non-decreasing order.
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
