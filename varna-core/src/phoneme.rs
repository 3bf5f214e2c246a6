//! Phoneme value types

use crate::script::Script;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad phoneme category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Vowel (svara)
    Vowel,
    /// Consonant (vyañjana)
    Consonant,
    /// Anything else: ayogavaha marks, punctuation, unrecognized codepoints
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Vowel => "vowel",
            Category::Consonant => "consonant",
            Category::Other => "other",
        };
        f.write_str(name)
    }
}

/// Place of articulation (sthana)
///
/// Units without a place are represented as `Option::<Place>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    /// Throat (kantha)
    Guttural,
    /// Palate (talu)
    Palatal,
    /// Roof of the mouth (murdhan)
    Retroflex,
    /// Teeth (danta)
    Dental,
    /// Lips (oshtha)
    Labial,
}

impl Place {
    /// All places, front of the mouth last
    pub const ALL: [Place; 5] = [
        Place::Guttural,
        Place::Palatal,
        Place::Retroflex,
        Place::Dental,
        Place::Labial,
    ];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Place::Guttural => "guttural",
            Place::Palatal => "palatal",
            Place::Retroflex => "retroflex",
            Place::Dental => "dental",
            Place::Labial => "labial",
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Place {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Place::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| format!("unknown articulation place: {s}"))
    }
}

/// Index of a savarna class inside one script table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub(crate) usize);

impl ClassId {
    /// Position of the class in its table
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One tokenized unit of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phoneme {
    /// Exact input text covered by this unit
    pub grapheme: String,
    /// Byte offset of the unit in the tokenized input
    pub offset: usize,
    /// Script the unit was read in
    pub script: Script,
    /// Broad category
    pub category: Category,
    /// Articulation place, if any
    pub place: Option<Place>,
    /// Savarna class in the script's table
    #[serde(skip)]
    pub class: Option<ClassId>,
    /// Bare Devanagari consonant letter carrying the implicit `a`
    pub inherent_vowel: bool,
    /// Whether the unit exists in the inventory at all
    pub recognized: bool,
}

impl Phoneme {
    /// Unit for a codepoint the inventory does not know
    pub fn unrecognized(grapheme: impl Into<String>, offset: usize, script: Script) -> Self {
        Self {
            grapheme: grapheme.into(),
            offset,
            script,
            category: Category::Other,
            place: None,
            class: None,
            inherent_vowel: false,
            recognized: false,
        }
    }

    /// Is this a vowel unit?
    #[inline]
    pub fn is_vowel(&self) -> bool {
        self.category == Category::Vowel
    }

    /// Is this a classified consonant unit?
    #[inline]
    pub fn is_consonant(&self) -> bool {
        self.class.is_some() && !self.is_vowel()
    }

    /// Length of the grapheme in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.grapheme.len()
    }

    /// True for zero-length units (never produced by the tokenizer)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grapheme.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_round_trip_names() {
        for place in Place::ALL {
            assert_eq!(place.as_str().parse::<Place>(), Ok(place));
        }
        assert!("nasal".parse::<Place>().is_err());
    }

    #[test]
    fn test_unrecognized_phoneme_is_neither() {
        let p = Phoneme::unrecognized("x", 0, Script::Unknown);
        assert_eq!(p.category, Category::Other);
        assert_eq!(p.place, None);
        assert!(!p.is_vowel());
        assert!(!p.is_consonant());
        assert!(!p.recognized);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Consonant.to_string(), "consonant");
        assert_eq!(Category::Other.to_string(), "other");
    }
}
