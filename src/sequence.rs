use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

fn default_len() -> usize {
    10_000
}

fn default_min() -> i64 {
    0
}

fn default_max() -> i64 {
    100
}

/// Shape of a random integer sequence; bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceSpec {
    #[serde(default = "default_len")]
    pub len: usize,
    #[serde(default = "default_min")]
    pub min: i64,
    #[serde(default = "default_max")]
    pub max: i64,
}

impl Default for SequenceSpec {
    fn default() -> Self {
        Self {
            len: default_len(),
            min: default_min(),
            max: default_max(),
        }
    }
}

impl SequenceSpec {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.min > self.max {
            return Err(ProfileError::Invalid(format!(
                "sequence min {} is greater than max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<i64>, ProfileError> {
        self.validate()?;
        Ok((0..self.len)
            .map(|_| rng.gen_range(self.min..=self.max))
            .collect())
    }
}
