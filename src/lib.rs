#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Dataset builder driving the fill, sort, and write phases.
pub mod builder;
/// Data-driven pattern catalog and slot rendering.
pub mod catalog;
/// Run configuration.
pub mod config;
/// Centralized defaults and catalog constants.
pub mod constants;
/// Randomized calendar-date stamps.
pub mod dates;
/// Filename synthesizer and the candidate-source trait.
pub mod synth;
/// Shared type aliases.
pub mod types;
/// Static vocabulary store: category taxonomy and modifier lists.
pub mod vocab;

mod errors;

pub use builder::{BuildPhase, DatasetBuilder, DatasetSummary, FillStats};
pub use catalog::{Pattern, Slot, builtin_catalog};
pub use config::GeneratorConfig;
pub use dates::{DateLayout, random_date_stamp};
pub use errors::DatasetError;
pub use synth::{NameSource, Synthesizer};
pub use types::{CategoryName, Filename, Term, WordList};
pub use vocab::Vocabulary;
