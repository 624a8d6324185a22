//! Character classification strategies
//!
//! Two interchangeable strategies consume the same [`Corpus`]:
//!
//! - [`ExactMatcher`] recognizes a mask only by full 80-cell structural
//!   equality and abstains (`None`) otherwise. Never wrong when the font
//!   is unchanged, silent on novel shapes.
//! - [`PixelBayes`] is a trained probabilistic model that always emits a
//!   guess, including for shapes never seen in training.
//!
//! The asymmetry is deliberate: precision-or-silence versus
//! recall-with-possible-misclassification. Callers pick a strategy at
//! construction via [`ClassifierKind`].

mod bayes;
mod exact;

pub use bayes::PixelBayes;
pub use exact::ExactMatcher;

use capgrid_core::Morphology;

use crate::corpus::Corpus;
use crate::error::RecogResult;

/// Classification strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierKind {
    /// Structural lookup; abstains on unknown masks
    #[default]
    Exact,
    /// Naive Bayes over pixel features; always answers
    Bayes,
}

/// A trained character classifier.
///
/// `classify` returns `None` only for strategies with an abstain policy;
/// the probabilistic strategy always returns `Some`.
pub trait Classifier: Send + Sync {
    /// Map a mask to a character, or `None` if unrecognized.
    fn classify(&self, morph: &Morphology) -> Option<char>;
}

/// Build the selected classifier from a corpus.
///
/// # Errors
///
/// Returns [`crate::RecogError::EmptyCorpus`] if the corpus holds no
/// training samples.
pub fn build_classifier(kind: ClassifierKind, corpus: &Corpus) -> RecogResult<Box<dyn Classifier>> {
    Ok(match kind {
        ClassifierKind::Exact => Box::new(ExactMatcher::from_corpus(corpus)?),
        ClassifierKind::Bayes => Box::new(PixelBayes::train(corpus)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use capgrid_core::Morphology;

    fn corpus_with(label: char) -> Corpus {
        let mut corpus = Corpus::new();
        corpus.add_sample(label, Morphology::from_fn(|row, _| row < 5));
        corpus
    }

    #[test]
    fn test_build_rejects_empty_corpus() {
        let corpus = Corpus::new();
        assert!(build_classifier(ClassifierKind::Exact, &corpus).is_err());
        assert!(build_classifier(ClassifierKind::Bayes, &corpus).is_err());
    }

    #[test]
    fn test_strategy_asymmetry_on_novel_mask() {
        let corpus = corpus_with('A');
        let novel = Morphology::from_fn(|row, col| (row * col) % 3 == 1);

        let exact = build_classifier(ClassifierKind::Exact, &corpus).unwrap();
        assert_eq!(exact.classify(&novel), None);

        let bayes = build_classifier(ClassifierKind::Bayes, &corpus).unwrap();
        assert_eq!(bayes.classify(&novel), Some('A'));
    }
}
