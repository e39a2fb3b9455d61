pub mod error;
pub mod fanout;
pub mod fib;
pub mod harness;
pub mod logging;
pub mod profile;
pub mod report;
pub mod rng;
pub mod sequence;
pub mod sort;
pub mod workloads;

pub use fanout::{run_fan_out, FanOutConfig, FanOutReport};
pub use fib::{FibonacciProvider, IterativeFib, RecursiveFib};
pub use harness::{Harness, HarnessBuilder, HarnessSettings};
pub use profile::{Profile, ProfileLoader};
pub use sort::{naive_bubble_sort, optimized_bubble_sort, SortStats, SortVariant};
