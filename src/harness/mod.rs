use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use crate::{
    report::{ReportWriter, RunRecord, WorkloadOutcome},
    rng::{RngManager, StreamRng},
};

pub struct HarnessSettings {
    pub profile_name: String,
    pub seed: u64,
    pub report_dir: Option<PathBuf>,
}

pub struct HarnessBuilder {
    settings: HarnessSettings,
    workloads: Vec<Box<dyn Workload>>,
}

impl HarnessBuilder {
    pub fn new(settings: HarnessSettings) -> Self {
        Self {
            settings,
            workloads: Vec::new(),
        }
    }

    pub fn with_workload(mut self, workload: impl Workload + 'static) -> Self {
        self.workloads.push(Box::new(workload));
        self
    }

    pub fn push_workload(&mut self, workload: Box<dyn Workload>) {
        self.workloads.push(workload);
    }

    pub fn build(self) -> Harness {
        Harness {
            rng: RngManager::new(self.settings.seed),
            workloads: self.workloads,
            report_writer: ReportWriter::new(self.settings.report_dir.clone()),
            settings: self.settings,
        }
    }
}

pub struct Harness {
    rng: RngManager,
    workloads: Vec<Box<dyn Workload>>,
    report_writer: ReportWriter,
    settings: HarnessSettings,
}

impl Harness {
    pub fn workload_count(&self) -> usize {
        self.workloads.len()
    }

    pub fn run(&mut self) -> Result<Vec<RunRecord>> {
        self.run_with_hook(|_| {})
    }

    /// Runs every workload in registration order, calling `hook` with each
    /// record after it has been written.
    pub fn run_with_hook<F>(&mut self, mut hook: F) -> Result<Vec<RunRecord>>
    where
        F: FnMut(&RunRecord),
    {
        let mut records = Vec::with_capacity(self.workloads.len());
        for workload in &mut self.workloads {
            let name = workload.name().to_string();
            let ctx = WorkloadContext {
                profile_name: &self.settings.profile_name,
            };
            let mut rng_stream = self.rng.stream(workload.rng_stream());

            let started_at = Utc::now();
            let start = Instant::now();
            let outcome = workload
                .run(&ctx, &mut rng_stream)
                .with_context(|| format!("workload '{name}' failed"))?;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1_000.0;
            info!(workload = %name, elapsed_ms, "workload finished");

            let record = RunRecord {
                profile: self.settings.profile_name.clone(),
                workload: name,
                started_at,
                elapsed_ms,
                outcome,
            };
            if let Some(path) = self.report_writer.write(&record)? {
                info!(path = %path.display(), "report written");
            }
            hook(&record);
            records.push(record);
        }
        Ok(records)
    }
}

pub struct WorkloadContext<'a> {
    pub profile_name: &'a str,
}

pub trait Workload {
    fn name(&self) -> &str;

    /// Name of the random stream fed to `run`. Workloads that share a
    /// stream name see identical random input.
    fn rng_stream(&self) -> &str {
        self.name()
    }

    fn run(&mut self, ctx: &WorkloadContext, rng: &mut StreamRng) -> Result<WorkloadOutcome>;
}
