use std::io;

use thiserror::Error;

/// Error type for configuration, generation, and persistence failures.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error(
        "target of {target} unique filenames is unreachable: \
         {accepted} accepted before {streak} consecutive duplicates"
    )]
    TargetUnreachable {
        target: usize,
        accepted: usize,
        streak: usize,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("csv output failure: {0}")]
    Csv(#[from] csv::Error),
}
