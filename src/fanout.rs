//! Fixed fan-out of Fibonacci workers with a join-all fan-in.
//!
//! Each worker owns its result until it sends it over the channel; the
//! coordinator only sums after every worker has been joined.

use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::FanOutError,
    fib::{FibonacciProvider, MAX_FIB_INPUT},
};

pub const DEFAULT_FIB_INPUT: u32 = 38;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanOutConfig {
    pub n: u32,
    pub threads: usize,
}

impl Default for FanOutConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_FIB_INPUT,
            threads: num_cpus::get(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerResult {
    pub worker: usize,
    pub value: u64,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FanOutReport {
    pub n: u32,
    pub threads: usize,
    pub sum: u64,
    pub elapsed: Duration,
    /// Sorted by worker index.
    pub workers: Vec<WorkerResult>,
}

impl FanOutReport {
    /// Sum of every worker's own runtime; exceeds `elapsed` when the
    /// workers actually ran in parallel.
    pub fn cumulative_worker_time(&self) -> Duration {
        self.workers.iter().map(|w| w.elapsed).sum()
    }
}

pub fn run_fan_out(
    provider: &dyn FibonacciProvider,
    config: &FanOutConfig,
) -> Result<FanOutReport, FanOutError> {
    if config.threads == 0 {
        return Err(FanOutError::NoWorkers);
    }
    if config.n > MAX_FIB_INPUT {
        return Err(FanOutError::InputTooLarge { n: config.n });
    }

    let n = config.n;
    let start = Instant::now();
    let (tx, rx) = mpsc::channel();

    let (mut workers, panicked) = thread::scope(|scope| {
        let handles: Vec<_> = (0..config.threads)
            .map(|worker| {
                let tx = tx.clone();
                scope.spawn(move || {
                    let started = Instant::now();
                    let value = provider.compute(n);
                    // The receiver outlives the scope, so this cannot fail.
                    let _ = tx.send(WorkerResult {
                        worker,
                        value,
                        elapsed: started.elapsed(),
                    });
                })
            })
            .collect();
        drop(tx);

        let received: Vec<WorkerResult> = rx.iter().collect();
        let panicked: Vec<usize> = handles
            .into_iter()
            .enumerate()
            .filter_map(|(worker, handle)| handle.join().is_err().then_some(worker))
            .collect();
        (received, panicked.first().copied())
    });
    let elapsed = start.elapsed();

    if let Some(worker) = panicked {
        return Err(FanOutError::WorkerPanicked { worker });
    }
    if workers.len() != config.threads {
        return Err(FanOutError::MissingResults {
            expected: config.threads,
            received: workers.len(),
        });
    }

    workers.sort_by_key(|w| w.worker);
    let sum = workers
        .iter()
        .try_fold(0_u64, |acc, w| acc.checked_add(w.value))
        .ok_or(FanOutError::SumOverflow)?;

    debug!(
        provider = provider.name(),
        n,
        threads = config.threads,
        sum,
        elapsed_ms = elapsed.as_secs_f64() * 1_000.0,
        "fan-out complete"
    );

    Ok(FanOutReport {
        n,
        threads: config.threads,
        sum,
        elapsed,
        workers,
    })
}
