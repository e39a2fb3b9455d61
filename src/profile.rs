use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    error::ProfileError,
    fanout::{FanOutConfig, DEFAULT_FIB_INPUT},
    fib::{ProviderKind, MAX_FIB_INPUT},
    sequence::SequenceSpec,
    sort::SortVariant,
};

fn default_seed() -> u64 {
    7
}

fn default_variants() -> Vec<SortVariant> {
    SortVariant::all()
}

fn default_fib_input() -> u32 {
    DEFAULT_FIB_INPUT
}

/// A named set of workloads run together by `quadbench run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub sort: Option<SortProfile>,
    #[serde(default)]
    pub fibonacci: Option<FibProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortProfile {
    #[serde(default = "default_variants")]
    pub variants: Vec<SortVariant>,
    #[serde(flatten)]
    pub sequence: SequenceSpec,
}

impl Default for SortProfile {
    fn default() -> Self {
        Self {
            variants: default_variants(),
            sequence: SequenceSpec::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FibProfile {
    #[serde(default = "default_fib_input")]
    pub n: u32,
    /// Falls back to the logical processor count.
    #[serde(default)]
    pub threads: Option<usize>,
    #[serde(default)]
    pub provider: ProviderKind,
}

impl Default for FibProfile {
    fn default() -> Self {
        Self {
            n: default_fib_input(),
            threads: None,
            provider: ProviderKind::default(),
        }
    }
}

impl FibProfile {
    pub fn fan_out(&self) -> FanOutConfig {
        FanOutConfig {
            n: self.n,
            threads: self.threads.unwrap_or_else(num_cpus::get),
        }
    }
}

impl Profile {
    /// Both workload groups with their default settings.
    pub fn builtin() -> Self {
        Self {
            name: "default".to_string(),
            description: Some("naive and optimized bubble sort, threaded fib(38)".to_string()),
            seed: default_seed(),
            sort: Some(SortProfile::default()),
            fibonacci: Some(FibProfile::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::Invalid("profile must define a name".into()));
        }
        if self.sort.is_none() && self.fibonacci.is_none() {
            return Err(ProfileError::Invalid(format!(
                "profile '{}' defines no workloads",
                self.name
            )));
        }
        if let Some(sort) = &self.sort {
            if sort.variants.is_empty() {
                return Err(ProfileError::Invalid(
                    "sort section must list at least one variant".into(),
                ));
            }
            let mut seen = HashSet::new();
            if let Some(dup) = sort.variants.iter().find(|v| !seen.insert(**v)) {
                return Err(ProfileError::Invalid(format!(
                    "sort variant '{dup}' listed more than once"
                )));
            }
            sort.sequence.validate()?;
        }
        if let Some(fib) = &self.fibonacci {
            if fib.n > MAX_FIB_INPUT {
                return Err(ProfileError::Invalid(format!(
                    "fibonacci n {} exceeds {}",
                    fib.n, MAX_FIB_INPUT
                )));
            }
            if fib.threads == Some(0) {
                return Err(ProfileError::Invalid(
                    "fibonacci threads must be greater than zero".into(),
                ));
            }
        }
        Ok(())
    }
}

pub struct ProfileLoader {
    base_dir: PathBuf,
}

impl ProfileLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Profile> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile file {}", path.display()))?;
        let profile: Profile = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        profile
            .validate()
            .with_context(|| format!("Invalid profile {}", path.display()))?;
        Ok(profile)
    }
}
