//! Exact structural matching against the corpus

use capgrid_core::Morphology;

use super::Classifier;
use crate::corpus::Corpus;
use crate::error::{RecogError, RecogResult};

/// Classifier that recognizes a mask only by full structural equality.
///
/// Scans every known character's mask set in training order; the first
/// class containing an 80-cell match wins. No scoring, no partial
/// similarity: the font is assumed noise-free, so an exact match is
/// expected to succeed whenever the rendering is unchanged, and a false
/// positive is worse than an omission.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    corpus: Corpus,
}

impl ExactMatcher {
    /// Build a matcher over a snapshot of the corpus.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::EmptyCorpus`] if the corpus holds no
    /// training samples.
    pub fn from_corpus(corpus: &Corpus) -> RecogResult<Self> {
        if corpus.is_empty() {
            return Err(RecogError::EmptyCorpus);
        }
        Ok(Self {
            corpus: corpus.clone(),
        })
    }
}

impl Classifier for ExactMatcher {
    fn classify(&self, morph: &Morphology) -> Option<char> {
        self.corpus.find(morph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripe(row_on: usize) -> Morphology {
        Morphology::from_fn(|row, _| row == row_on)
    }

    #[test]
    fn test_known_mask_is_recognized() {
        let mut corpus = Corpus::new();
        corpus.add_sample('X', stripe(1));
        corpus.add_sample('Y', stripe(2));

        let matcher = ExactMatcher::from_corpus(&corpus).unwrap();
        assert_eq!(matcher.classify(&stripe(1)), Some('X'));
        assert_eq!(matcher.classify(&stripe(2)), Some('Y'));
    }

    #[test]
    fn test_any_stored_variant_matches() {
        let mut corpus = Corpus::new();
        corpus.add_sample('X', stripe(1));
        corpus.add_sample('X', stripe(3));

        let matcher = ExactMatcher::from_corpus(&corpus).unwrap();
        assert_eq!(matcher.classify(&stripe(3)), Some('X'));
    }

    #[test]
    fn test_single_cell_difference_abstains() {
        let mut corpus = Corpus::new();
        let known = stripe(1);
        corpus.add_sample('X', known);

        let mut off_by_one = known;
        off_by_one.set(9, 7, true).unwrap();

        let matcher = ExactMatcher::from_corpus(&corpus).unwrap();
        assert_eq!(matcher.classify(&off_by_one), None);
    }
}
