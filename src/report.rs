use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    fanout::FanOutReport,
    sort::{SortStats, SortVariant},
};

/// What a single workload produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkloadOutcome {
    BubbleSort {
        variant: SortVariant,
        len: usize,
        sort_ms: f64,
        stats: SortStats,
    },
    Fibonacci {
        provider: String,
        report: FanOutReport,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub profile: String,
    pub workload: String,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: f64,
    pub outcome: WorkloadOutcome,
}

/// Writes one pretty-printed JSON file per run record.
pub struct ReportWriter {
    dir: Option<PathBuf>,
}

impl ReportWriter {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    pub fn disabled() -> Self {
        Self { dir: None }
    }

    pub fn enabled(&self) -> bool {
        self.dir.is_some()
    }

    pub fn write(&self, record: &RunRecord) -> Result<Option<PathBuf>> {
        let Some(base) = &self.dir else {
            return Ok(None);
        };
        let dir = base.join(&record.profile);
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create report dir {}", dir.display()))?;
        let path = dir.join(format!("{}.json", record.workload));
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        Ok(Some(path))
    }
}

pub fn load_record(path: impl AsRef<Path>) -> Result<RunRecord> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report {}", path.display()))?;
    let record = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse report {}", path.display()))?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> RunRecord {
        RunRecord {
            profile: "unit".into(),
            workload: "bubble_sort_naive".into(),
            started_at: Utc::now(),
            elapsed_ms: 1.5,
            outcome: WorkloadOutcome::BubbleSort {
                variant: SortVariant::Naive,
                len: 3,
                sort_ms: 0.1,
                stats: SortStats {
                    passes: 3,
                    comparisons: 3,
                    swaps: 1,
                },
            },
        }
    }

    #[test]
    fn disabled_writer_skips_output() {
        let writer = ReportWriter::disabled();
        assert!(!writer.enabled());
        assert!(writer.write(&sample_record()).unwrap().is_none());
    }

    #[test]
    fn writes_under_profile_directory() {
        let temp = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(Some(temp.path().to_path_buf()));
        let path = writer.write(&sample_record()).unwrap().unwrap();

        assert_eq!(path, temp.path().join("unit").join("bubble_sort_naive.json"));
        let data = fs::read_to_string(&path).unwrap();
        assert!(data.contains("\"kind\": \"bubble_sort\""));

        let loaded = load_record(&path).unwrap();
        assert_eq!(loaded.workload, "bubble_sort_naive");
    }
}
