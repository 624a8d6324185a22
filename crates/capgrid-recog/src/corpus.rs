//! Morphology corpus - the training-derived character map
//!
//! A [`Corpus`] maps each known character to the distinct masks observed
//! for it during training. Classes and the masks within a class keep
//! their first-seen order, so a corpus built from the same training files
//! is always identical; nothing about it depends on hashing or iteration
//! order.

use capgrid_core::Morphology;

/// One character class: a label and its distinct observed masks.
#[derive(Debug, Clone)]
pub struct CharClass {
    label: char,
    morphs: Vec<Morphology>,
}

impl CharClass {
    /// The character this class recognizes.
    pub fn label(&self) -> char {
        self.label
    }

    /// Distinct masks observed for this character, in training order.
    pub fn morphs(&self) -> &[Morphology] {
        &self.morphs
    }
}

/// Mapping from character to its set of distinct observed masks.
///
/// Read-only after construction; the classifiers never mutate it.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    classes: Vec<CharClass>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one labeled mask.
    ///
    /// A new character creates a new class; a mask structurally equal to
    /// one already stored for the character is dropped. Returns whether
    /// the mask was stored.
    pub fn add_sample(&mut self, label: char, morph: Morphology) -> bool {
        match self.classes.iter_mut().find(|c| c.label == label) {
            Some(class) => {
                if class.morphs.contains(&morph) {
                    false
                } else {
                    class.morphs.push(morph);
                    true
                }
            }
            None => {
                self.classes.push(CharClass {
                    label,
                    morphs: vec![morph],
                });
                true
            }
        }
    }

    /// All character classes in first-seen order.
    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    /// The class for a character, if trained.
    pub fn class(&self, label: char) -> Option<&CharClass> {
        self.classes.iter().find(|c| c.label == label)
    }

    /// Number of known characters.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Total number of stored masks across all characters.
    pub fn morph_count(&self) -> usize {
        self.classes.iter().map(|c| c.morphs.len()).sum()
    }

    /// Whether no training samples were stored.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Scan every class for a mask structurally equal to `morph`.
    pub fn find(&self, morph: &Morphology) -> Option<char> {
        self.classes
            .iter()
            .find(|class| class.morphs.contains(morph))
            .map(|class| class.label)
    }
}
