//! Filename synthesizer: one candidate stem per invocation.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::catalog::{Pattern, builtin_catalog};
use crate::errors::DatasetError;
use crate::types::Filename;
use crate::vocab::Vocabulary;

/// Source of candidate filename stems consumed by the dataset builder.
///
/// Implementations promise a non-empty stem per call and nothing else; in
/// particular no uniqueness, which is the builder's concern. Implemented by
/// [`Synthesizer`] and by scripted stubs in tests.
pub trait NameSource {
    /// Produce the next candidate stem.
    fn next_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Filename;
}

/// Draws a category and a pattern uniformly at random, then renders the
/// pattern's slots against the vocabulary store.
///
/// The RNG is always an explicit caller-supplied dependency so seeded runs
/// reproduce exactly.
#[derive(Debug, Clone)]
pub struct Synthesizer<'v> {
    vocab: &'v Vocabulary,
    catalog: Vec<Pattern>,
}

impl<'v> Synthesizer<'v> {
    /// Create a synthesizer over `vocab` and an explicit pattern catalog.
    pub fn new(vocab: &'v Vocabulary, catalog: Vec<Pattern>) -> Result<Self, DatasetError> {
        if vocab.category_count() == 0 {
            return Err(DatasetError::Configuration(
                "vocabulary has no categories".to_string(),
            ));
        }
        if catalog.is_empty() {
            return Err(DatasetError::Configuration(
                "pattern catalog is empty".to_string(),
            ));
        }
        Ok(Self { vocab, catalog })
    }

    /// Create a synthesizer over `vocab` with the built-in catalog.
    pub fn with_builtin_catalog(vocab: &'v Vocabulary) -> Result<Self, DatasetError> {
        Self::new(vocab, builtin_catalog())
    }

    /// Generate one candidate stem.
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> Filename {
        let (_, terms) = self.vocab.random_category(rng);
        let pattern = self
            .catalog
            .choose(rng)
            .expect("catalog validated non-empty at construction");
        pattern.render_terms(self.vocab, terms, rng)
    }
}

impl NameSource for Synthesizer<'_> {
    fn next_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Filename {
        self.synthesize(rng)
    }
}
