//! Dataset builder: drives a run through its fill, sort, and write phases.

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::errors::DatasetError;
use crate::synth::{NameSource, Synthesizer};
use crate::types::Filename;
use crate::vocab::Vocabulary;

/// Phases a run moves through, in order. `Written` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    /// Accepting unique candidates until the target size is reached.
    Filling,
    /// Ordering the accepted set lexicographically.
    Sorting,
    /// The artifact has been persisted.
    Written,
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildPhase::Filling => f.write_str("filling"),
            BuildPhase::Sorting => f.write_str("sorting"),
            BuildPhase::Written => f.write_str("written"),
        }
    }
}

/// Counters observed during the fill phase.
#[derive(Debug, Default, Clone, Copy)]
pub struct FillStats {
    /// Total candidate draws.
    pub attempts: usize,
    /// Candidates accepted into the unique set.
    pub accepted: usize,
    /// Candidates discarded as exact-string duplicates.
    pub duplicates: usize,
    /// Longest run of consecutive duplicates seen.
    pub longest_duplicate_streak: usize,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    /// Rows written; equals the configured target size.
    pub records: usize,
    /// Path of the CSV artifact.
    pub output_path: PathBuf,
    /// Fill-phase counters.
    pub stats: FillStats,
}

#[derive(Debug, Serialize)]
struct DatasetRow<'a> {
    filename: &'a str,
}

/// Owns the uniqueness set for the duration of a run and enforces the one
/// structural invariant of the dataset: no two identical rows.
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    config: GeneratorConfig,
}

impl DatasetBuilder {
    /// Create a builder after validating `config`.
    pub fn new(config: GeneratorConfig) -> Result<Self, DatasetError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration this builder runs with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run a full generation pass with the built-in vocabulary and catalog.
    ///
    /// A configured seed reproduces the dataset exactly; otherwise the RNG is
    /// seeded from OS entropy.
    pub fn run(&self) -> Result<DatasetSummary, DatasetError> {
        let vocab = Vocabulary::builtin();
        let mut source = Synthesizer::with_builtin_catalog(&vocab)?;
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_source(&mut source, &mut rng)
    }

    /// Run a full generation pass with an explicit candidate source and RNG.
    pub fn run_with_source<S, R>(
        &self,
        source: &mut S,
        rng: &mut R,
    ) -> Result<DatasetSummary, DatasetError>
    where
        S: NameSource,
        R: Rng + ?Sized,
    {
        let (unique, stats) = self.fill(source, rng)?;
        let rows = Self::sort(unique);
        self.write(&rows)?;
        info!(
            records = rows.len(),
            path = %self.config.output_path.display(),
            "dataset written"
        );
        Ok(DatasetSummary {
            records: rows.len(),
            output_path: self.config.output_path.clone(),
            stats,
        })
    }

    /// Fill phase: draw candidates until the unique set reaches the target.
    ///
    /// Duplicates are discarded silently; a consecutive-duplicate streak
    /// exceeding the configured limit fails the run with
    /// [`DatasetError::TargetUnreachable`] instead of spinning forever.
    pub fn fill<S, R>(
        &self,
        source: &mut S,
        rng: &mut R,
    ) -> Result<(HashSet<Filename>, FillStats), DatasetError>
    where
        S: NameSource,
        R: Rng + ?Sized,
    {
        debug!(phase = %BuildPhase::Filling, target = self.config.target_size, "phase start");
        let mut unique: HashSet<Filename> = HashSet::with_capacity(self.config.target_size);
        let mut stats = FillStats::default();
        let mut streak = 0_usize;

        while unique.len() < self.config.target_size {
            let candidate = source.next_name(rng);
            stats.attempts += 1;
            if unique.insert(candidate) {
                stats.accepted += 1;
                streak = 0;
                if stats.accepted % self.config.progress_interval == 0 {
                    info!(
                        accepted = stats.accepted,
                        target = self.config.target_size,
                        "fill progress"
                    );
                }
            } else {
                stats.duplicates += 1;
                streak += 1;
                stats.longest_duplicate_streak = stats.longest_duplicate_streak.max(streak);
                if streak >= self.config.duplicate_streak_limit {
                    return Err(DatasetError::TargetUnreachable {
                        target: self.config.target_size,
                        accepted: unique.len(),
                        streak,
                    });
                }
            }
        }

        Ok((unique, stats))
    }

    /// Sort phase: deterministic ascending lexicographic order.
    pub fn sort(unique: HashSet<Filename>) -> Vec<Filename> {
        debug!(phase = %BuildPhase::Sorting, records = unique.len(), "phase start");
        let mut rows: Vec<Filename> = unique.into_iter().collect();
        rows.sort_unstable();
        rows
    }

    /// Write phase: persist rows as a single-column CSV with a header.
    ///
    /// The parent directory must already exist; I/O failures propagate
    /// unretried and leave no consistency guarantee for a partial file.
    pub fn write(&self, rows: &[Filename]) -> Result<(), DatasetError> {
        let mut writer = csv::Writer::from_path(&self.config.output_path)?;
        for row in rows {
            writer.serialize(DatasetRow { filename: row })?;
        }
        writer.flush()?;
        debug!(phase = %BuildPhase::Written, records = rows.len(), "phase complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use rand::SeedableRng;

    /// Replays a fixed script of candidates, ignoring the RNG.
    struct ScriptedSource {
        script: VecDeque<&'static str>,
    }

    impl ScriptedSource {
        fn new(script: &[&'static str]) -> Self {
            Self {
                script: script.iter().copied().collect(),
            }
        }
    }

    impl NameSource for ScriptedSource {
        fn next_name<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Filename {
            self.script.pop_front().expect("script exhausted").to_string()
        }
    }

    /// Always returns the same stem, so any target above one is unreachable.
    struct ConstantSource;

    impl NameSource for ConstantSource {
        fn next_name<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Filename {
            "same".to_string()
        }
    }

    fn build_config(target_size: usize) -> GeneratorConfig {
        GeneratorConfig {
            target_size,
            seed: Some(0),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn fill_discards_duplicates_and_continues() {
        let builder = DatasetBuilder::new(build_config(4)).unwrap();
        let mut source = ScriptedSource::new(&["a", "b", "a", "c", "d"]);
        let mut rng = StdRng::from_seed([0_u8; 32]);

        let (unique, stats) = builder.fill(&mut source, &mut rng).unwrap();
        assert_eq!(stats.attempts, 5);
        assert_eq!(stats.accepted, 4);
        assert_eq!(stats.duplicates, 1);
        assert_eq!(stats.longest_duplicate_streak, 1);

        let rows = DatasetBuilder::sort(unique);
        assert_eq!(rows, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn unreachable_target_fails_instead_of_spinning() {
        let config = GeneratorConfig {
            duplicate_streak_limit: 10,
            ..build_config(2)
        };
        let builder = DatasetBuilder::new(config).unwrap();
        let mut rng = StdRng::from_seed([0_u8; 32]);

        let err = builder.fill(&mut ConstantSource, &mut rng).unwrap_err();
        match err {
            DatasetError::TargetUnreachable {
                target,
                accepted,
                streak,
            } => {
                assert_eq!(target, 2);
                assert_eq!(accepted, 1);
                assert_eq!(streak, 10);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let err = DatasetBuilder::new(build_config(0)).unwrap_err();
        assert!(matches!(err, DatasetError::Configuration(_)));
    }
}
