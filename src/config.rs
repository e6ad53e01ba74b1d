//! Run configuration for dataset generation.

use std::path::PathBuf;

use crate::constants::dataset::{
    DEFAULT_OUTPUT_PATH, DEFAULT_TARGET_SIZE, DUPLICATE_STREAK_LIMIT, PROGRESS_LOG_INTERVAL,
};
use crate::errors::DatasetError;

/// Top-level generation configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// RNG seed; `None` draws OS entropy, producing a fresh dataset each run.
    pub seed: Option<u64>,
    /// Unique stems the run must accept before sorting and writing.
    pub target_size: usize,
    /// Path of the CSV artifact. The parent directory must already exist.
    pub output_path: PathBuf,
    /// Consecutive-duplicate streak treated as proof the target exceeds the
    /// reachable output space.
    pub duplicate_streak_limit: usize,
    /// Accepted-count interval between fill-progress log lines.
    pub progress_interval: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            target_size: DEFAULT_TARGET_SIZE,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            duplicate_streak_limit: DUPLICATE_STREAK_LIMIT,
            progress_interval: PROGRESS_LOG_INTERVAL,
        }
    }
}

impl GeneratorConfig {
    /// Check field ranges before a run starts.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.target_size == 0 {
            return Err(DatasetError::Configuration(
                "target_size must be at least 1".to_string(),
            ));
        }
        if self.duplicate_streak_limit == 0 {
            return Err(DatasetError::Configuration(
                "duplicate_streak_limit must be at least 1".to_string(),
            ));
        }
        if self.progress_interval == 0 {
            return Err(DatasetError::Configuration(
                "progress_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_run() {
        let config = GeneratorConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.target_size, 50_000);
        assert_eq!(
            config.output_path,
            PathBuf::from("./datasets/filename_training_dataset_v2.csv")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_fields_are_rejected() {
        let zero_target = GeneratorConfig {
            target_size: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            zero_target.validate(),
            Err(DatasetError::Configuration(_))
        ));

        let zero_streak = GeneratorConfig {
            duplicate_streak_limit: 0,
            ..GeneratorConfig::default()
        };
        assert!(zero_streak.validate().is_err());

        let zero_interval = GeneratorConfig {
            progress_interval: 0,
            ..GeneratorConfig::default()
        };
        assert!(zero_interval.validate().is_err());
    }
}
