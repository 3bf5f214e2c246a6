//! Script detection
//!
//! The single place where character ranges are inspected to decide which
//! writing system a string uses. Everything else in the workspace calls
//! [`detect_script`] or the character predicates below.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Writing systems understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Devanagari, the native syllabic script
    Devanagari,
    /// IAST Latin transliteration with diacritics
    #[default]
    Iast,
    /// Neither script could be established
    Unknown,
}

impl Script {
    /// Short identifier used in configuration files
    pub fn code(&self) -> &'static str {
        match self {
            Script::Devanagari => "devanagari",
            Script::Iast => "iast",
            Script::Unknown => "unknown",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Script::Devanagari => "Devanagari",
            Script::Iast => "IAST",
            Script::Unknown => "Unknown",
        }
    }

    /// Scripts that have classification tables
    pub fn known() -> [Script; 2] {
        [Script::Devanagari, Script::Iast]
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Script {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "devanagari" | "deva" | "dev" => Ok(Script::Devanagari),
            "iast" | "latin" | "roman" => Ok(Script::Iast),
            other => Err(format!("unsupported script: {other}")),
        }
    }
}

/// Lowercase letters of the IAST scheme after NFC composition
const IAST_LETTERS: &[char] = &[
    'a', 'ā', 'i', 'ī', 'u', 'ū', 'ṛ', 'ṝ', 'ḷ', 'ḹ', 'e', 'o', 'ṃ', 'ṁ', 'ḥ', 'k', 'g', 'ṅ', 'c',
    'j', 'ñ', 'ṭ', 'ḍ', 'ṇ', 't', 'd', 'n', 'p', 'b', 'm', 'y', 'r', 'l', 'v', 'ś', 'ṣ', 's', 'h',
];

/// Combining diacritics that may follow an IAST base letter in decomposed input
const IAST_MARKS: &[char] = &[
    '\u{0301}', // acute (ś)
    '\u{0303}', // tilde (ñ)
    '\u{0304}', // macron (ā, ṝ, ḹ)
    '\u{0307}', // dot above (ṅ, ṁ)
    '\u{0310}', // candrabindu (m̐)
    '\u{0323}', // dot below (ṛ, ṭ, ṃ, ḥ)
];

/// Is the character inside the Devanagari Unicode block?
#[inline]
pub fn is_devanagari(ch: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&ch)
}

/// Is the character a combining diacritical mark (U+0300..U+036F)?
#[inline]
pub fn is_combining_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&ch)
}

/// Is the character an IAST letter, ignoring case?
pub fn is_iast_letter(ch: char) -> bool {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => IAST_LETTERS.contains(&l),
        // Multi-char lowercase forms (e.g. 'İ') are never IAST
        _ => false,
    }
}

/// Is the character one of the combining marks IAST uses?
#[inline]
pub fn is_iast_mark(ch: char) -> bool {
    IAST_MARKS.contains(&ch)
}

/// Classify the writing system of `text`
///
/// Any Devanagari codepoint wins. Otherwise the text is IAST when it has at
/// least one letter and every letter and combining mark belongs to the IAST
/// set. Non-alphabetic characters (spaces, digits, punctuation) are ignored.
pub fn detect_script(text: &str) -> Script {
    let mut saw_letter = false;
    let mut all_iast = true;

    for ch in text.chars() {
        if is_devanagari(ch) {
            return Script::Devanagari;
        }

        if is_combining_mark(ch) {
            all_iast &= is_iast_mark(ch);
        } else if ch.is_alphabetic() {
            saw_letter = true;
            all_iast &= is_iast_letter(ch);
        }
    }

    if saw_letter && all_iast {
        Script::Iast
    } else {
        Script::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_devanagari() {
        assert_eq!(detect_script("क"), Script::Devanagari);
        assert_eq!(detect_script("रामः"), Script::Devanagari);
        // A single Devanagari codepoint is enough
        assert_eq!(detect_script("kaक"), Script::Devanagari);
    }

    #[test]
    fn test_detect_iast() {
        assert_eq!(detect_script("ka"), Script::Iast);
        assert_eq!(detect_script("rāmaḥ"), Script::Iast);
        assert_eq!(detect_script("Kṛṣṇa"), Script::Iast);
        assert_eq!(detect_script("deva-datta"), Script::Iast);
    }

    #[test]
    fn test_detect_decomposed_iast() {
        // a + combining macron, s + combining acute
        assert_eq!(detect_script("ra\u{0304}ma"), Script::Iast);
        assert_eq!(detect_script("s\u{0301}iva"), Script::Iast);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(detect_script(""), Script::Unknown);
        assert_eq!(detect_script("   "), Script::Unknown);
        assert_eq!(detect_script("123"), Script::Unknown);
        assert_eq!(detect_script("xyz"), Script::Unknown);
        assert_eq!(detect_script("fox"), Script::Unknown);
        assert_eq!(detect_script("привет"), Script::Unknown);
        // Combining mark outside the IAST set
        assert_eq!(detect_script("a\u{0308}"), Script::Unknown);
    }

    #[test]
    fn test_script_from_str() {
        assert_eq!("Devanagari".parse::<Script>(), Ok(Script::Devanagari));
        assert_eq!("deva".parse::<Script>(), Ok(Script::Devanagari));
        assert_eq!("IAST".parse::<Script>(), Ok(Script::Iast));
        assert!("cyrillic".parse::<Script>().is_err());
    }

    #[test]
    fn test_script_display_and_code() {
        assert_eq!(Script::Devanagari.to_string(), "Devanagari");
        assert_eq!(Script::Iast.code(), "iast");
        assert_eq!(Script::default(), Script::Iast);
    }
}
