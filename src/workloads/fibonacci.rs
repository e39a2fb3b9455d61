use anyhow::Result;

use crate::{
    fanout::{run_fan_out, FanOutConfig},
    fib::FibonacciProvider,
    harness::{Workload, WorkloadContext},
    report::WorkloadOutcome,
    rng::StreamRng,
};

pub struct FibonacciWorkload {
    provider: Box<dyn FibonacciProvider>,
    fan_out: FanOutConfig,
}

impl FibonacciWorkload {
    pub fn new(provider: Box<dyn FibonacciProvider>, fan_out: FanOutConfig) -> Self {
        Self { provider, fan_out }
    }
}

impl Workload for FibonacciWorkload {
    fn name(&self) -> &str {
        "fibonacci_fan_out"
    }

    fn run(&mut self, _ctx: &WorkloadContext, _rng: &mut StreamRng) -> Result<WorkloadOutcome> {
        let report = run_fan_out(self.provider.as_ref(), &self.fan_out)?;
        Ok(WorkloadOutcome::Fibonacci {
            provider: self.provider.name().to_string(),
            report,
        })
    }
}
