use crate::core::{HiLoError, Result};

/// Configuration for an equity simulation
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of random board completions to evaluate
    pub trials: u64,
    /// Trials run between cancellation checks, and per rayon task when
    /// running in parallel
    pub batch_size: u64,
    /// Optional random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            batch_size: 1_000,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the simulation configuration
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(HiLoError::InvalidConfig(
                "trials must be greater than 0".to_string(),
            ));
        }

        if self.batch_size == 0 {
            return Err(HiLoError::InvalidConfig(
                "batch_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// How many batches the trials are split into. The last one may be
    /// short.
    pub fn num_batches(&self) -> u64 {
        self.trials.div_ceil(self.batch_size)
    }

    /// Size of batch `idx`.
    pub(crate) fn batch_len(&self, idx: u64) -> u64 {
        let start = idx * self.batch_size;
        self.batch_size.min(self.trials.saturating_sub(start))
    }
}
