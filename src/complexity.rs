//! Asymptotic cost reporting.
//!
//! Every textbook sort documents its time and space growth. The CLI prints it
//! after the result when asked, and the benchmark includes it in its JSON.

use std::fmt;

use serde::Serialize;

/// Growth class of a cost function, ordered from cheapest to most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Growth {
    Constant,
    Linear,
    Linearithmic,
    Quadratic,
}

impl Growth {
    /// The expression inside `O(...)`.
    pub fn notation(self) -> &'static str {
        match self {
            Growth::Constant => "1",
            Growth::Linear => "n",
            Growth::Linearithmic => "n log n",
            Growth::Quadratic => "n^2",
        }
    }

    /// Relative cost on a 10..=100 scale, reported next to benchmark timings.
    pub fn weight(self) -> u32 {
        match self {
            Growth::Constant => 10,
            Growth::Linear => 30,
            Growth::Linearithmic => 50,
            Growth::Quadratic => 100,
        }
    }
}

impl fmt::Display for Growth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O({})", self.notation())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub time: Growth,
    pub space: Growth,
}

impl Complexity {
    pub fn new(time: Growth, space: Growth) -> Self {
        Self { time, space }
    }

    /// Two-line `Time:` / `Space:` block.
    pub fn report(&self) -> String {
        format!("Time: {}\nSpace: {}", self.time, self.space)
    }
}
