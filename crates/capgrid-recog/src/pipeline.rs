//! End-to-end recognition pipeline
//!
//! [`Recognizer`] is the explicit context object callers construct once
//! (typically at process start) and reuse for every image: decode,
//! segment, classify each slot, concatenate, persist. There is no hidden
//! global state; the recognizer is immutable and shareable across
//! threads after construction.
//!
//! The pipeline is best-effort throughout. An undecodable input degrades
//! to an empty result rather than failing the run, and slots the exact
//! matcher cannot recognize are omitted from the output text.

use std::path::Path;

use capgrid_core::IntensityGrid;
use tracing::{debug, warn};

use crate::classify::{Classifier, ClassifierKind, build_classifier};
use crate::corpus::Corpus;
use crate::error::RecogResult;
use crate::segment::{SLOT_COUNT, segment};
use crate::train::{TrainingReport, load_training_dir};

/// One-image recognition pipeline with a fixed, pre-trained classifier.
pub struct Recognizer {
    classifier: Box<dyn Classifier>,
}

impl Recognizer {
    /// Build a recognizer over an already-constructed corpus.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RecogError::EmptyCorpus`] if the corpus holds no
    /// training samples.
    pub fn from_corpus(corpus: &Corpus, kind: ClassifierKind) -> RecogResult<Self> {
        Ok(Self {
            classifier: build_classifier(kind, corpus)?,
        })
    }

    /// Train from the fixed directory layout and build a recognizer.
    ///
    /// Per-sample training failures are recorded in the returned report,
    /// not propagated; only a corpus with no usable samples at all is an
    /// error.
    pub fn train<P: AsRef<Path>>(
        root: P,
        kind: ClassifierKind,
    ) -> RecogResult<(Self, TrainingReport)> {
        let (corpus, report) = load_training_dir(root);
        let recognizer = Self::from_corpus(&corpus, kind)?;
        Ok((recognizer, report))
    }

    /// Recognize the characters in a decoded grid.
    ///
    /// Returns the concatenated predictions in slot order. The result is
    /// shorter than 5 characters when segmentation came up short or when
    /// the classifier abstained on a slot.
    pub fn recognize(&self, grid: &IntensityGrid) -> String {
        let morphs = segment(grid);
        if morphs.len() < SLOT_COUNT {
            warn!(
                slots = morphs.len(),
                expected = SLOT_COUNT,
                "segmentation shortfall; result will be degraded"
            );
        }

        let mut text = String::with_capacity(SLOT_COUNT);
        for (slot, morph) in morphs.iter().enumerate() {
            match self.classifier.classify(morph) {
                Some(ch) => text.push(ch),
                None => debug!(slot, "unrecognized mask; slot omitted"),
            }
        }
        text
    }

    /// Recognize the characters in an image file.
    ///
    /// A file that cannot be read or decoded logs a warning and degrades
    /// to an empty string.
    pub fn recognize_file<P: AsRef<Path>>(&self, path: P) -> String {
        match capgrid_io::read_intensity(&path) {
            Ok(grid) => self.recognize(&grid),
            Err(err) => {
                warn!(
                    path = %path.as_ref().display(),
                    %err,
                    "image unreadable; emitting empty result"
                );
                String::new()
            }
        }
    }

    /// Recognize an image file and persist the result.
    ///
    /// Writes the predicted text as a single line to `output_path` and
    /// returns it. Decode failures degrade as in [`Self::recognize_file`];
    /// only failures to write the output propagate.
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        image_path: P,
        output_path: Q,
    ) -> RecogResult<String> {
        let text = self.recognize_file(image_path);
        std::fs::write(output_path, &text)?;
        Ok(text)
    }
}

impl std::fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recognizer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{BAND_LEFT, BAND_TOP, SLOT_STRIDE};
    use capgrid_core::{MORPH_HEIGHT, MORPH_WIDTH, Morphology};

    /// Deterministic per-character mask: row `r` is the label's code
    /// rotated left by `r`, so distinct characters always differ in row 0.
    fn glyph(label: char) -> Morphology {
        let code = label as u8;
        let mut rows = [0u8; MORPH_HEIGHT];
        for (r, row) in rows.iter_mut().enumerate() {
            *row = code.rotate_left(r as u32);
        }
        Morphology::from_rows(rows)
    }

    /// Render a 5-character label into a synthetic captcha grid.
    fn render(label: &str) -> IntensityGrid {
        let mut grid = IntensityGrid::filled(60, 30, 200).unwrap();
        for (slot, ch) in label.chars().enumerate() {
            let morph = glyph(ch);
            let left = BAND_LEFT + slot as u32 * SLOT_STRIDE;
            for row in 0..MORPH_HEIGHT {
                for col in 0..MORPH_WIDTH {
                    if morph.get(row, col).unwrap() {
                        grid.set(left + col as u32, BAND_TOP + row as u32, 30).unwrap();
                    }
                }
            }
        }
        grid
    }

    fn trained_corpus(labels: &[&str]) -> Corpus {
        let mut corpus = Corpus::new();
        for label in labels {
            for ch in label.chars() {
                corpus.add_sample(ch, glyph(ch));
            }
        }
        corpus
    }

    #[test]
    fn test_recognize_known_grid() {
        let corpus = trained_corpus(&["AB12Z"]);
        let recognizer = Recognizer::from_corpus(&corpus, ClassifierKind::Exact).unwrap();
        assert_eq!(recognizer.recognize(&render("AB12Z")), "AB12Z");
    }

    #[test]
    fn test_recognize_is_deterministic() {
        let corpus = trained_corpus(&["AB12Z", "QW9RT"]);
        let recognizer = Recognizer::from_corpus(&corpus, ClassifierKind::Exact).unwrap();
        let grid = render("Q1B9T");
        let first = recognizer.recognize(&grid);
        for _ in 0..3 {
            assert_eq!(recognizer.recognize(&grid), first);
        }
    }

    #[test]
    fn test_exact_matcher_omits_unknown_slots() {
        let corpus = trained_corpus(&["AB12Z"]);
        let recognizer = Recognizer::from_corpus(&corpus, ClassifierKind::Exact).unwrap();
        // 'X' never appeared in training; its slot is dropped
        assert_eq!(recognizer.recognize(&render("AXB1Z")), "AB1Z");
    }

    #[test]
    fn test_bayes_fills_every_slot() {
        let corpus = trained_corpus(&["AB12Z"]);
        let recognizer = Recognizer::from_corpus(&corpus, ClassifierKind::Bayes).unwrap();
        let text = recognizer.recognize(&render("AXB1Z"));
        assert_eq!(text.chars().count(), SLOT_COUNT);
        assert_eq!(&text[..1], "A");
    }

    #[test]
    fn test_undersized_grid_degrades() {
        let corpus = trained_corpus(&["AB12Z"]);
        let recognizer = Recognizer::from_corpus(&corpus, ClassifierKind::Exact).unwrap();
        let grid = IntensityGrid::filled(10, 10, 200).unwrap();
        assert_eq!(recognizer.recognize(&grid), "");
    }
}
