use std::time::Instant;

use anyhow::{bail, Result};
use tracing::debug;

use crate::{
    harness::{Workload, WorkloadContext},
    report::WorkloadOutcome,
    rng::StreamRng,
    sequence::SequenceSpec,
    sort::{is_sorted, SortVariant},
};

pub struct BubbleSortWorkload {
    name: String,
    variant: SortVariant,
    sequence: SequenceSpec,
}

impl BubbleSortWorkload {
    pub fn new(variant: SortVariant, sequence: SequenceSpec) -> Self {
        Self {
            name: format!("bubble_sort_{variant}"),
            variant,
            sequence,
        }
    }
}

impl Workload for BubbleSortWorkload {
    fn name(&self) -> &str {
        &self.name
    }

    /// Every variant sorts the same sequence for a given seed.
    fn rng_stream(&self) -> &str {
        "bubble_sort"
    }

    fn run(&mut self, ctx: &WorkloadContext, rng: &mut StreamRng) -> Result<WorkloadOutcome> {
        let mut data = self.sequence.generate(rng)?;
        debug!(
            profile = ctx.profile_name,
            variant = %self.variant,
            len = data.len(),
            "sorting generated sequence"
        );

        let start = Instant::now();
        let stats = self.variant.sort(&mut data);
        let sort_ms = start.elapsed().as_secs_f64() * 1_000.0;

        if !is_sorted(&data) {
            bail!("{} variant left the sequence unsorted", self.variant);
        }

        Ok(WorkloadOutcome::BubbleSort {
            variant: self.variant,
            len: data.len(),
            sort_ms,
            stats,
        })
    }
}
