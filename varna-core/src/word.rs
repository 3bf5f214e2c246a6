//! The analysis pipeline for a single word

use crate::phoneme::Phoneme;
use crate::script::{detect_script, Script};
use crate::tables::{self, PhonologyTables};
use crate::tokenize::{letters, Tokenizer};
use crate::validate::{validate, ValidationReport};
use serde::Serialize;

/// A word with its detected script, validation outcome and phonemes
///
/// Analysis is best-effort: an invalid word is still tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub text: String,
    pub script: Script,
    pub validation: ValidationReport,
    pub phonemes: Vec<Phoneme>,
}

impl Word {
    /// Analyze `text` with the embedded tables
    pub fn analyze(text: &str) -> Self {
        Self::analyze_with(text, tables::embedded())
    }

    /// Analyze `text` with injected tables
    pub fn analyze_with(text: &str, tables: &PhonologyTables) -> Self {
        Self {
            text: text.to_string(),
            script: detect_script(text),
            validation: validate(text),
            phonemes: Tokenizer::new(tables).tokenize(text),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid
    }

    /// Unit graphemes in order
    pub fn graphemes(&self) -> impl Iterator<Item = &str> {
        self.phonemes.iter().map(|p| p.grapheme.as_str())
    }

    /// Vowel and consonant units only
    pub fn letters(&self) -> impl Iterator<Item = &Phoneme> {
        letters(&self.phonemes)
    }

    pub fn first_letter(&self) -> Option<&Phoneme> {
        self.letters().next()
    }

    pub fn last_letter(&self) -> Option<&Phoneme> {
        self.letters().last()
    }
}
