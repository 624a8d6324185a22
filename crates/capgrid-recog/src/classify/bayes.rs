//! Multinomial naive Bayes over flattened pixel features
//!
//! Every (mask, character) pair in the corpus is flattened into an
//! 80-dimensional binary feature vector; each ink cell counts as one
//! occurrence of its feature. Training fits per-class feature
//! frequencies with Laplace smoothing, and inference returns the
//! highest-posterior character. This classifier never abstains.

use capgrid_core::{MORPH_CELLS, Morphology};

use super::Classifier;
use crate::corpus::Corpus;
use crate::error::{RecogError, RecogResult};

/// Trained multinomial naive Bayes model.
///
/// Immutable after [`PixelBayes::train`]. Classes keep corpus insertion
/// order and score ties break to the earliest class, so inference is
/// deterministic.
#[derive(Debug, Clone)]
pub struct PixelBayes {
    labels: Vec<char>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<[f64; MORPH_CELLS]>,
}

impl PixelBayes {
    /// Fit the model on every (mask, character) pair in the corpus.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::EmptyCorpus`] if the corpus holds no
    /// training samples.
    pub fn train(corpus: &Corpus) -> RecogResult<Self> {
        if corpus.is_empty() {
            return Err(RecogError::EmptyCorpus);
        }

        let total_masks = corpus.morph_count() as f64;
        let mut labels = Vec::with_capacity(corpus.class_count());
        let mut class_log_prior = Vec::with_capacity(corpus.class_count());
        let mut feature_log_prob = Vec::with_capacity(corpus.class_count());

        for class in corpus.classes() {
            let mut counts = [0u32; MORPH_CELLS];
            for morph in class.morphs() {
                for (cell, on) in morph.cells().enumerate() {
                    if on {
                        counts[cell] += 1;
                    }
                }
            }

            // Laplace smoothing: one pseudo-occurrence per feature
            let class_total: u32 = counts.iter().sum();
            let denom = (class_total as f64 + MORPH_CELLS as f64).ln();
            let mut log_prob = [0.0f64; MORPH_CELLS];
            for (cell, count) in counts.iter().enumerate() {
                log_prob[cell] = (*count as f64 + 1.0).ln() - denom;
            }

            labels.push(class.label());
            class_log_prior.push((class.morphs().len() as f64 / total_masks).ln());
            feature_log_prob.push(log_prob);
        }

        Ok(Self {
            labels,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// The highest-posterior character for a mask.
    pub fn predict(&self, morph: &Morphology) -> char {
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;

        for (index, log_prob) in self.feature_log_prob.iter().enumerate() {
            let mut score = self.class_log_prior[index];
            for (cell, on) in morph.cells().enumerate() {
                if on {
                    score += log_prob[cell];
                }
            }
            if score > best_score {
                best_score = score;
                best = index;
            }
        }

        self.labels[best]
    }
}

impl Classifier for PixelBayes {
    fn classify(&self, morph: &Morphology) -> Option<char> {
        Some(self.predict(morph))
    }
}
