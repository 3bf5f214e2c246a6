//! Data Transfer Objects for API

use serde::{Deserialize, Serialize};
use varna_core::{
    Category, Classification, Classifier, Phoneme, PhonologyTables, Place, Script,
    ValidationReport,
};

/// One phoneme, with its class resolved to a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonemeDto {
    /// Exact input text of the unit
    pub grapheme: String,
    /// Byte offset in the tokenized text
    pub offset: usize,
    /// Script the unit was read in
    pub script: Script,
    /// Vowel, consonant or other
    pub category: Category,
    /// Articulation place
    pub place: Option<Place>,
    /// Savarna class name
    pub class: Option<String>,
    /// Implicit `a` on a bare Devanagari consonant
    pub inherent_vowel: bool,
    /// Present in the inventory
    pub recognized: bool,
}

impl PhonemeDto {
    /// Convert a core phoneme, resolving its class against `tables`
    pub fn from_phoneme(phoneme: &Phoneme, tables: &PhonologyTables) -> Self {
        let class = Classifier::new(tables)
            .classify_phoneme(phoneme)
            .class_name()
            .map(str::to_string);
        Self {
            grapheme: phoneme.grapheme.clone(),
            offset: phoneme.offset,
            script: phoneme.script,
            category: phoneme.category,
            place: phoneme.place,
            class,
            inherent_vowel: phoneme.inherent_vowel,
            recognized: phoneme.recognized,
        }
    }
}

/// Full analysis of one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    /// Input as given
    pub text: String,
    /// Detected script of the input
    pub script: Script,
    /// Validation outcome
    pub is_valid: bool,
    /// Failure reason when invalid
    pub error: Option<String>,
    /// Canonical form in the configured target script
    pub normalized: String,
    /// Text the phonemes were read from
    pub tokenized: String,
    /// Ordered phonemes
    pub phonemes: Vec<PhonemeDto>,
}

impl WordAnalysis {
    pub(crate) fn new(
        text: &str,
        validation: &ValidationReport,
        normalized: String,
        tokenized: String,
        phonemes: Vec<PhonemeDto>,
    ) -> Self {
        Self {
            text: text.to_string(),
            script: validation.script,
            is_valid: validation.is_valid,
            error: validation.reason(),
            normalized,
            tokenized,
            phonemes,
        }
    }

    /// Number of vowel and consonant phonemes
    pub fn letter_count(&self) -> usize {
        self.phonemes
            .iter()
            .filter(|p| matches!(p.category, Category::Vowel | Category::Consonant))
            .count()
    }
}

/// Classification of a phoneme query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationDto {
    /// The query string
    pub phoneme: String,
    /// Script of the query
    pub script: Script,
    /// Savarna class name
    pub class: Option<String>,
    /// Members of that class
    pub members: Vec<String>,
    /// Articulation place
    pub place: Option<Place>,
    /// Is it a vowel?
    pub is_vowel: bool,
    /// Is it a classified consonant?
    pub is_consonant: bool,
}

impl ClassificationDto {
    pub(crate) fn new(phoneme: &str, classification: &Classification<'_>) -> Self {
        let class = classification.equivalence_class;
        Self {
            phoneme: phoneme.to_string(),
            script: classification.script,
            class: class.map(|c| c.name().to_string()),
            members: class.map(|c| c.members().to_vec()).unwrap_or_default(),
            place: classification.articulation_place,
            is_vowel: classification.is_vowel,
            is_consonant: classification.is_consonant,
        }
    }
}
