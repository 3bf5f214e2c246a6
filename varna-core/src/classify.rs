//! Classification queries
//!
//! Homorganic (savarna) and articulation-place questions answered purely
//! from a [`PhonologyTables`] value. Misses are reported as `None`/`false`.

use crate::phoneme::{Category, Phoneme, Place};
use crate::scheme::VIRAMA;
use crate::script::{detect_script, Script};
use crate::tables::{self, PhonologyTables, SavarnaClass, TableEntry};
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

/// Everything the tables say about one phoneme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification<'t> {
    pub script: Script,
    pub equivalence_class: Option<&'t SavarnaClass>,
    pub articulation_place: Option<Place>,
    pub is_vowel: bool,
    pub is_consonant: bool,
}

impl<'t> Classification<'t> {
    fn unknown(script: Script) -> Self {
        Self {
            script,
            equivalence_class: None,
            articulation_place: None,
            is_vowel: false,
            is_consonant: false,
        }
    }

    fn from_entry(script: Script, entry: TableEntry, class: Option<&'t SavarnaClass>) -> Self {
        let is_vowel = entry.category == Category::Vowel;
        Self {
            script,
            equivalence_class: class,
            articulation_place: entry.place,
            is_vowel,
            is_consonant: class.is_some() && !is_vowel,
        }
    }

    /// Name of the savarna class, if classified
    pub fn class_name(&self) -> Option<&'t str> {
        self.equivalence_class.map(|c| c.name())
    }
}

/// Normalize a phoneme query string into a table key
///
/// Devanagari: a trailing virama is dropped from a consonant (क् → क).
/// IAST: NFC, lowercase.
pub(crate) fn table_key(script: Script, text: &str) -> String {
    match script {
        Script::Devanagari => {
            let mut chars: Vec<char> = text.chars().collect();
            if chars.len() > 1 && chars.last() == Some(&VIRAMA) {
                chars.pop();
            }
            chars.into_iter().collect()
        }
        _ => text.nfc().flat_map(char::to_lowercase).nfc().collect(),
    }
}

/// Query interface over injected tables
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'t> {
    tables: &'t PhonologyTables,
}

impl Classifier<'static> {
    /// Classifier over the process-wide embedded tables
    pub fn embedded() -> Self {
        Self::new(tables::embedded())
    }
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::embedded()
    }
}

impl<'t> Classifier<'t> {
    /// Create a classifier over `tables`
    pub fn new(tables: &'t PhonologyTables) -> Self {
        Self { tables }
    }

    /// The tables being queried
    pub fn tables(&self) -> &'t PhonologyTables {
        self.tables
    }

    fn entry(&self, phoneme: &str) -> Option<(Script, TableEntry)> {
        let text = phoneme.trim();
        let script = detect_script(text);
        let table = self.tables.table(script)?;
        table
            .lookup(&table_key(script, text))
            .map(|entry| (script, entry))
    }

    fn class_for(&self, script: Script, entry: TableEntry) -> Option<&'t SavarnaClass> {
        let id = entry.class?;
        self.tables.table(script)?.class(id)
    }

    /// Are `a` and `b` savarna?
    ///
    /// True iff both resolve to the same class in the same script's table.
    /// Phonemes written in different scripts are never homorganic.
    pub fn are_homorganic(&self, a: &str, b: &str) -> bool {
        match (self.entry(a), self.entry(b)) {
            (Some((sa, ea)), Some((sb, eb))) => {
                sa == sb && ea.class.is_some() && ea.class == eb.class
            }
            _ => false,
        }
    }

    /// Savarna class containing `phoneme`
    pub fn equivalence_class_of(&self, phoneme: &str) -> Option<&'t SavarnaClass> {
        let (script, entry) = self.entry(phoneme)?;
        self.class_for(script, entry)
    }

    /// Articulation place of `phoneme`
    pub fn articulation_place_of(&self, phoneme: &str) -> Option<Place> {
        self.entry(phoneme)?.1.place
    }

    /// Full classification of a phoneme string; never panics
    pub fn classify(&self, phoneme: &str) -> Classification<'t> {
        match self.entry(phoneme) {
            Some((script, entry)) => {
                Classification::from_entry(script, entry, self.class_for(script, entry))
            }
            None => Classification::unknown(detect_script(phoneme.trim())),
        }
    }

    /// Classification of a tokenized unit
    pub fn classify_phoneme(&self, phoneme: &Phoneme) -> Classification<'t> {
        if !phoneme.recognized {
            return Classification::unknown(phoneme.script);
        }
        let entry = TableEntry {
            category: phoneme.category,
            place: phoneme.place,
            class: phoneme.class,
        };
        Classification::from_entry(phoneme.script, entry, self.class_for(phoneme.script, entry))
    }

    /// Savarna test for two tokenized units
    pub fn phonemes_homorganic(&self, a: &Phoneme, b: &Phoneme) -> bool {
        a.script == b.script && a.class.is_some() && a.class == b.class
    }
}

/// Are `a` and `b` savarna? (embedded tables)
pub fn are_homorganic(a: &str, b: &str) -> bool {
    Classifier::embedded().are_homorganic(a, b)
}

/// Savarna class of `phoneme` (embedded tables)
pub fn equivalence_class_of(phoneme: &str) -> Option<&'static SavarnaClass> {
    Classifier::embedded().equivalence_class_of(phoneme)
}

/// Articulation place of `phoneme` (embedded tables)
pub fn articulation_place_of(phoneme: &str) -> Option<Place> {
    Classifier::embedded().articulation_place_of(phoneme)
}

/// Classify `phoneme` (embedded tables)
pub fn classify(phoneme: &str) -> Classification<'static> {
    Classifier::embedded().classify(phoneme)
}
