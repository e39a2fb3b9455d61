use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile validation error: {0}")]
    Invalid(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FanOutError {
    #[error("fan-out needs at least one worker thread")]
    NoWorkers,
    #[error("fib({n}) does not fit in 64 bits")]
    InputTooLarge { n: u32 },
    #[error("worker {worker} panicked before reporting a result")]
    WorkerPanicked { worker: usize },
    #[error("expected {expected} worker results, received {received}")]
    MissingResults { expected: usize, received: usize },
    #[error("sum of worker results overflowed")]
    SumOverflow,
}
