//! Quadratic comparison-exchange sorting.
//!
//! Both variants sort in place and report how much work they did, which is
//! what the benchmarks compare.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortVariant {
    /// Always runs every pass.
    Naive,
    /// Stops after the first pass without a swap.
    Optimized,
}

impl SortVariant {
    pub fn all() -> Vec<SortVariant> {
        vec![SortVariant::Naive, SortVariant::Optimized]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortVariant::Naive => "naive",
            SortVariant::Optimized => "optimized",
        }
    }

    pub fn sort<T: Ord>(self, data: &mut [T]) -> SortStats {
        match self {
            SortVariant::Naive => naive_bubble_sort(data),
            SortVariant::Optimized => optimized_bubble_sort(data),
        }
    }
}

impl fmt::Display for SortVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Work counters for a single sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStats {
    pub passes: u64,
    pub comparisons: u64,
    pub swaps: u64,
}

/// Bubble sort without early exit: `n` passes and `n(n-1)/2` comparisons
/// regardless of input order.
pub fn naive_bubble_sort<T: Ord>(data: &mut [T]) -> SortStats {
    let n = data.len();
    let mut stats = SortStats::default();
    for i in 0..n {
        stats.passes += 1;
        for j in 0..n - i - 1 {
            stats.comparisons += 1;
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                stats.swaps += 1;
            }
        }
    }
    stats
}

/// Bubble sort that terminates once a full pass performs no swaps.
///
/// Already-sorted input costs one pass of `n - 1` comparisons.
pub fn optimized_bubble_sort<T: Ord>(data: &mut [T]) -> SortStats {
    let n = data.len();
    let mut stats = SortStats::default();
    for i in 0..n {
        stats.passes += 1;
        let mut swapped = false;
        for j in 0..n - i - 1 {
            stats.comparisons += 1;
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    stats
}

pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
