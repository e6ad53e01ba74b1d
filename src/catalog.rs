//! Data-driven pattern catalog.
//!
//! A pattern is a named, ordered list of [`Slot`]s joined with underscores.
//! New shapes are added by appending to [`builtin_catalog`]; selection and
//! rendering stay untouched.

use std::borrow::Cow;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::constants::catalog::{
    FILE_STATE_WORDS, OWNER_PREFIX_WORDS, PADDED_INT_MAX, PADDED_INT_WIDTH, REVIEW_SUFFIX_WORDS,
    SLOT_SEPARATOR, SMALL_INT_MAX,
};
use crate::dates::random_date_stamp;
use crate::errors::DatasetError;
use crate::types::{Filename, WordList};
use crate::vocab::Vocabulary;

/// One value source inside a pattern.
#[derive(Debug, Clone)]
pub enum Slot {
    /// A term from the chosen category.
    Term,
    /// Randomized date stamp in one of the five layouts.
    DateStamp,
    /// Version tag.
    Version,
    /// Company name.
    Company,
    /// Client identifier.
    Client,
    /// Project codename.
    Project,
    /// Calendar year.
    Year,
    /// Full month name.
    Month,
    /// Fiscal quarter.
    Quarter,
    /// Workflow status word.
    Status,
    /// Random integer in `1..=max`.
    Int {
        /// Inclusive upper bound.
        max: u32,
    },
    /// Zero-padded random integer in `1..=max`.
    PaddedInt {
        /// Inclusive upper bound.
        max: u32,
        /// Rendered digit width.
        width: usize,
    },
    /// One word from a fixed choice list.
    Choice(WordList),
}

impl Slot {
    fn fill<R: Rng + ?Sized>(&self, vocab: &Vocabulary, terms: WordList, rng: &mut R) -> String {
        match self {
            Slot::Term => pick(rng, terms).to_string(),
            Slot::DateStamp => random_date_stamp(rng),
            Slot::Version => pick(rng, vocab.versions()).to_string(),
            Slot::Company => pick(rng, vocab.companies()).to_string(),
            Slot::Client => pick(rng, vocab.clients()).to_string(),
            Slot::Project => pick(rng, vocab.projects()).to_string(),
            Slot::Year => pick(rng, vocab.years()).to_string(),
            Slot::Month => pick(rng, vocab.months()).to_string(),
            Slot::Quarter => pick(rng, vocab.quarters()).to_string(),
            Slot::Status => pick(rng, vocab.statuses()).to_string(),
            Slot::Int { max } => rng.random_range(1..=*max).to_string(),
            Slot::PaddedInt { max, width } => {
                format!("{:0width$}", rng.random_range(1..=*max), width = *width)
            }
            Slot::Choice(words) => pick(rng, words).to_string(),
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, words: WordList) -> &'static str {
    words
        .choose(rng)
        .copied()
        .expect("vocabulary lists are never empty")
}

/// A composition template: slots rendered left to right, underscore-joined.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Unique name for this pattern.
    pub name: Cow<'static, str>,
    /// Slots rendered in order.
    pub slots: Vec<Slot>,
}

impl Pattern {
    /// Render this pattern against `category`, drawing slot values from
    /// `vocab`.
    pub fn render<R: Rng + ?Sized>(
        &self,
        vocab: &Vocabulary,
        category: &str,
        rng: &mut R,
    ) -> Result<Filename, DatasetError> {
        let terms = vocab
            .terms(category)
            .ok_or_else(|| DatasetError::UnknownCategory(category.to_string()))?;
        Ok(self.render_terms(vocab, terms, rng))
    }

    /// Render against an already-resolved term list.
    pub fn render_terms<R: Rng + ?Sized>(
        &self,
        vocab: &Vocabulary,
        terms: WordList,
        rng: &mut R,
    ) -> Filename {
        let parts: Vec<String> = self
            .slots
            .iter()
            .map(|slot| slot.fill(vocab, terms, rng))
            .collect();
        parts.join(SLOT_SEPARATOR)
    }
}

fn pattern<const N: usize>(name: &'static str, slots: [Slot; N]) -> Pattern {
    Pattern {
        name: Cow::Borrowed(name),
        slots: slots.into(),
    }
}

/// The built-in composition catalog: 22 patterns mirroring common real-world
/// naming habits (date-, version-, company-, project-, period-, status-, and
/// number-decorated stems plus the bare term).
pub fn builtin_catalog() -> Vec<Pattern> {
    vec![
        pattern("term_date", [Slot::Term, Slot::DateStamp]),
        pattern("date_term", [Slot::DateStamp, Slot::Term]),
        pattern("term_version", [Slot::Term, Slot::Version]),
        pattern(
            "term_version_number",
            [Slot::Term, Slot::Version, Slot::Int { max: SMALL_INT_MAX }],
        ),
        pattern("company_term", [Slot::Company, Slot::Term]),
        pattern("term_client", [Slot::Term, Slot::Client]),
        pattern("project_term", [Slot::Project, Slot::Term]),
        pattern("term_year", [Slot::Term, Slot::Year]),
        pattern("term_month_year", [Slot::Term, Slot::Month, Slot::Year]),
        pattern("term_quarter_year", [Slot::Term, Slot::Quarter, Slot::Year]),
        pattern("year_quarter_term", [Slot::Year, Slot::Quarter, Slot::Term]),
        pattern("term_status", [Slot::Term, Slot::Status]),
        pattern(
            "term_padded_number",
            [
                Slot::Term,
                Slot::PaddedInt {
                    max: PADDED_INT_MAX,
                    width: PADDED_INT_WIDTH,
                },
            ],
        ),
        pattern("term_number", [Slot::Term, Slot::Int { max: SMALL_INT_MAX }]),
        pattern("term_year_month", [Slot::Term, Slot::Year, Slot::Month]),
        pattern(
            "project_term_version",
            [Slot::Project, Slot::Term, Slot::Version],
        ),
        pattern(
            "company_term_date",
            [Slot::Company, Slot::Term, Slot::DateStamp],
        ),
        pattern("term_client_year", [Slot::Term, Slot::Client, Slot::Year]),
        pattern("term", [Slot::Term]),
        pattern("term_file_state", [Slot::Term, Slot::Choice(FILE_STATE_WORDS)]),
        pattern("owner_term", [Slot::Choice(OWNER_PREFIX_WORDS), Slot::Term]),
        pattern(
            "term_review_stage",
            [Slot::Term, Slot::Choice(REVIEW_SUFFIX_WORDS)],
        ),
    ]
}
