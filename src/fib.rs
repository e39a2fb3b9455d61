//! Fibonacci providers used by the fan-out benchmark.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const MAX_FIB_INPUT: u32 = 93;

/// A deterministic, side-effect-free Fibonacci routine.
///
/// Implementations are called concurrently from every worker thread and may
/// assume `n <= MAX_FIB_INPUT`.
pub trait FibonacciProvider: Send + Sync {
    fn name(&self) -> &str;
    fn compute(&self, n: u32) -> u64;
}

/// Doubly recursive definition. Exponential on purpose: it is the CPU load.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveFib;

impl RecursiveFib {
    fn fib(n: u32) -> u64 {
        if n < 2 {
            n as u64
        } else {
            Self::fib(n - 1) + Self::fib(n - 2)
        }
    }
}

impl FibonacciProvider for RecursiveFib {
    fn name(&self) -> &str {
        "recursive"
    }

    fn compute(&self, n: u32) -> u64 {
        Self::fib(n)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IterativeFib;

impl FibonacciProvider for IterativeFib {
    fn name(&self) -> &str {
        "iterative"
    }

    fn compute(&self, n: u32) -> u64 {
        if n == 0 {
            return 0;
        }
        let (mut a, mut b) = (0_u64, 1_u64);
        for _ in 1..n {
            let next = a + b;
            a = b;
            b = next;
        }
        b
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Recursive,
    Iterative,
}

impl ProviderKind {
    pub fn provider(self) -> Box<dyn FibonacciProvider> {
        match self {
            ProviderKind::Recursive => Box::new(RecursiveFib),
            ProviderKind::Iterative => Box::new(IterativeFib),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Recursive => f.write_str("recursive"),
            ProviderKind::Iterative => f.write_str("iterative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_match_sequence() {
        let expected = [0_u64, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(RecursiveFib.compute(n as u32), *want);
            assert_eq!(IterativeFib.compute(n as u32), *want);
        }
    }

    #[test]
    fn providers_agree_on_benchmark_input() {
        assert_eq!(IterativeFib.compute(38), 39_088_169);
        assert_eq!(RecursiveFib.compute(25), IterativeFib.compute(25));
    }

    #[test]
    fn iterative_reaches_u64_limit() {
        assert_eq!(IterativeFib.compute(MAX_FIB_INPUT), 12_200_160_415_121_876_738);
    }

    #[test]
    fn kind_selects_provider() {
        assert_eq!(ProviderKind::Recursive.provider().name(), "recursive");
        assert_eq!(ProviderKind::Iterative.provider().name(), "iterative");
    }
}
