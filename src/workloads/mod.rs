mod bubble_sort;
mod fibonacci;

pub use bubble_sort::BubbleSortWorkload;
pub use fibonacci::FibonacciWorkload;

use crate::{harness::HarnessBuilder, profile::Profile};

/// Registers every workload the profile enables, sorts first.
pub fn register_profile(builder: &mut HarnessBuilder, profile: &Profile) {
    if let Some(sort) = &profile.sort {
        for &variant in &sort.variants {
            builder.push_workload(Box::new(BubbleSortWorkload::new(variant, sort.sequence)));
        }
    }
    if let Some(fib) = &profile.fibonacci {
        builder.push_workload(Box::new(FibonacciWorkload::new(
            fib.provider.provider(),
            fib.fan_out(),
        )));
    }
}
