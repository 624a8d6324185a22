//! Corpus construction from a labeled training directory
//!
//! The training layout is fixed: `input/input00.jpg` .. `input24.jpg`
//! paired with `output/output00.txt` .. `output24.txt`, where the first
//! line of each text file labels the correspondingly numbered image.
//!
//! A bad sample never aborts the build. Each index produces a structured
//! per-sample outcome instead: the sample either contributed masks to the
//! corpus or was skipped with a typed reason, and the whole run is
//! summarized in a [`TrainingReport`].

use std::path::Path;

use capgrid_core::Morphology;
use thiserror::Error;
use tracing::{debug, warn};

use crate::corpus::Corpus;
use crate::segment::segment;

/// Number of training sample indices scanned (0..25).
pub const TRAINING_SAMPLES: usize = 25;

/// Why a training sample was excluded from the corpus.
#[derive(Debug, Error)]
pub enum SkipReason {
    /// The label file could not be read
    #[error("label file unreadable: {0}")]
    Label(#[source] std::io::Error),

    /// The label file's first line was empty
    #[error("empty label")]
    EmptyLabel,

    /// The image could not be read or decoded
    #[error("image unreadable: {0}")]
    Image(#[source] capgrid_io::IoError),

    /// Label length and segmented slot count disagree
    #[error("label has {label_chars} characters but segmentation produced {slots} masks")]
    SlotMismatch { label_chars: usize, slots: usize },
}

/// Outcome of loading one training sample.
#[derive(Debug)]
pub enum SampleStatus {
    /// The sample was segmented and paired with its label
    Trained {
        /// Masks actually stored (duplicates of known masks are not)
        morphs_added: usize,
    },
    /// The sample was excluded
    Skipped {
        /// Why the sample was excluded
        reason: SkipReason,
    },
}

/// Per-sample record in a training run.
#[derive(Debug)]
pub struct SampleReport {
    /// Training sample index (0..24)
    pub index: usize,
    /// What happened to the sample
    pub status: SampleStatus,
}

/// Aggregated outcome of a corpus build.
#[derive(Debug, Default)]
pub struct TrainingReport {
    /// One record per training index, in index order
    pub samples: Vec<SampleReport>,
}

impl TrainingReport {
    /// Number of samples that contributed to the corpus.
    pub fn trained_count(&self) -> usize {
        self.samples
            .iter()
            .filter(|s| matches!(s.status, SampleStatus::Trained { .. }))
            .count()
    }

    /// Number of samples that were skipped.
    pub fn skipped_count(&self) -> usize {
        self.samples.len() - self.trained_count()
    }

    /// Iterate over the skipped samples with their reasons.
    pub fn skipped(&self) -> impl Iterator<Item = (usize, &SkipReason)> {
        self.samples.iter().filter_map(|s| match &s.status {
            SampleStatus::Skipped { reason } => Some((s.index, reason)),
            SampleStatus::Trained { .. } => None,
        })
    }
}

/// Build a corpus from a training directory.
///
/// Iterates the fixed sample indices in order; the resulting corpus
/// depends only on the files present and their content. Failures are
/// isolated per sample and recorded in the report, never propagated.
pub fn load_training_dir<P: AsRef<Path>>(root: P) -> (Corpus, TrainingReport) {
    let root = root.as_ref();
    let mut corpus = Corpus::new();
    let mut report = TrainingReport::default();

    for index in 0..TRAINING_SAMPLES {
        let status = match load_sample(root, index) {
            Ok(pairs) => {
                let mut morphs_added = 0;
                for (label, morph) in pairs {
                    if corpus.add_sample(label, morph) {
                        morphs_added += 1;
                    }
                }
                debug!(index, morphs_added, "training sample loaded");
                SampleStatus::Trained { morphs_added }
            }
            Err(reason) => {
                warn!(index, %reason, "training sample skipped");
                SampleStatus::Skipped { reason }
            }
        };
        report.samples.push(SampleReport { index, status });
    }

    (corpus, report)
}

/// Load one labeled sample as positional (character, mask) pairs.
fn load_sample(root: &Path, index: usize) -> Result<Vec<(char, Morphology)>, SkipReason> {
    let label_path = root.join("output").join(format!("output{:02}.txt", index));
    let text = std::fs::read_to_string(&label_path).map_err(SkipReason::Label)?;
    let label = text.lines().next().unwrap_or("").trim();
    if label.is_empty() {
        return Err(SkipReason::EmptyLabel);
    }

    let image_path = root.join("input").join(format!("input{:02}.jpg", index));
    let grid = capgrid_io::read_intensity(&image_path).map_err(SkipReason::Image)?;
    let morphs = segment(&grid);

    let label_chars = label.chars().count();
    if label_chars != morphs.len() {
        return Err(SkipReason::SlotMismatch {
            label_chars,
            slots: morphs.len(),
        });
    }

    Ok(label.chars().zip(morphs).collect())
}
