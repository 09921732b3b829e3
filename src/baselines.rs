use crate::complexity::{Complexity, Growth};
use crate::Sorter;

/// Standard library sort - the reference the textbook sorts are checked against
pub struct StdSorter;

impl Sorter for StdSorter {
    fn name(&self) -> &'static str {
        "std"
    }

    fn sort<T: Ord + Clone>(&self, data: &mut [T]) {
        data.sort();
    }

    fn complexity(&self) -> Complexity {
        Complexity::new(Growth::Linearithmic, Growth::Linear)
    }
}
