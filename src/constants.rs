/// Constants used by the dataset builder and its output artifact.
pub mod dataset {
    /// Default number of unique filename stems a run must accept.
    pub const DEFAULT_TARGET_SIZE: usize = 50_000;
    /// Default path for the written CSV artifact.
    pub const DEFAULT_OUTPUT_PATH: &str = "./datasets/filename_training_dataset_v2.csv";
    /// Accepted-count interval between fill-progress log lines.
    pub const PROGRESS_LOG_INTERVAL: usize = 5_000;
    /// Consecutive-duplicate streak after which the fill loop gives up.
    ///
    /// The reachable output space exceeds 10^7 distinct stems, so at the
    /// default target a streak anywhere near this long only happens when the
    /// configured target is not reachable at all.
    pub const DUPLICATE_STREAK_LIMIT: usize = 1_000_000;
}

/// Constants used by the randomized date formatter.
pub mod dates {
    /// First day of the sampling window.
    pub const WINDOW_START_YEAR: i32 = 2020;
    /// Month component of the window start.
    pub const WINDOW_START_MONTH: u32 = 1;
    /// Day component of the window start.
    pub const WINDOW_START_DAY: u32 = 1;
    /// Size of the sampling window in days (roughly five years).
    pub const WINDOW_SPAN_DAYS: i64 = 1825;
}

/// Constants used by the pattern catalog and slot rendering.
pub mod catalog {
    /// Separator joining rendered slots into one stem.
    pub const SLOT_SEPARATOR: &str = "_";
    /// Upper bound (inclusive) for small numeric suffixes.
    pub const SMALL_INT_MAX: u32 = 100;
    /// Upper bound (inclusive) for zero-padded numeric suffixes.
    pub const PADDED_INT_MAX: u32 = 9999;
    /// Digit width of zero-padded numeric suffixes.
    pub const PADDED_INT_WIDTH: usize = 4;
    /// Copy/backup style suffix words.
    pub const FILE_STATE_WORDS: &[&str] = &["copy", "backup", "old", "new", "latest"];
    /// Possessive prefix words.
    pub const OWNER_PREFIX_WORDS: &[&str] = &["my", "our", "team", "personal"];
    /// Review-stage suffix words.
    pub const REVIEW_SUFFIX_WORDS: &[&str] = &["final", "draft", "review", "edited"];
}
