//! Word validation
//!
//! Advisory only: a failed report never stops tokenization or
//! classification, it just tells the caller how much to trust them.

use crate::scheme::{self, JOINERS, NUKTA, VIRAMA};
use crate::script::{
    detect_script, is_combining_mark, is_devanagari, is_iast_letter, is_iast_mark, Script,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a combining sequence is malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedKind {
    /// Vowel sign with no consonant before it
    OrphanVowelSign,
    /// Virama with no consonant before it
    OrphanVirama,
    /// Vowel sign or virama directly after another sign or virama
    StackedSigns,
    /// Nukta, anusvara, visarga or candrabindu with nothing to attach to
    OrphanMark,
    /// Latin combining diacritic with no base letter
    OrphanCombiningMark,
    /// Anusvara, visarga or candrabindu on a consonant muted by virama
    MarkAfterVirama,
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MalformedKind::OrphanVowelSign => "vowel sign without a preceding consonant",
            MalformedKind::OrphanVirama => "virama without a preceding consonant",
            MalformedKind::StackedSigns => "sign follows another sign",
            MalformedKind::OrphanMark => "mark without a preceding letter",
            MalformedKind::OrphanCombiningMark => "combining diacritic without a base letter",
            MalformedKind::MarkAfterVirama => "mark follows a virama",
        };
        f.write_str(msg)
    }
}

/// Reasons a word fails validation
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// Empty or whitespace-only input
    #[error("input is empty")]
    Empty,

    /// Devanagari and Latin letters in one word
    #[error("word mixes Devanagari and Latin letters")]
    MixedScripts,

    /// Character outside both accepted sets
    #[error("unsupported character {ch:?} at byte {offset}")]
    UnsupportedCharacter { ch: char, offset: usize },

    /// Broken combining-mark sequence
    #[error("malformed sequence at byte {offset}: {reason}")]
    MalformedSequence { reason: MalformedKind, offset: usize },
}

/// Outcome of [`validate`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub script: Script,
    pub error: Option<ValidationError>,
}

impl ValidationReport {
    fn valid(script: Script) -> Self {
        Self {
            is_valid: true,
            script,
            error: None,
        }
    }

    fn invalid(script: Script, error: ValidationError) -> Self {
        Self {
            is_valid: false,
            script,
            error: Some(error),
        }
    }

    /// Human readable failure reason
    pub fn reason(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | '\'' | '|')
}

/// Check that `word` is well-formed in its detected script
pub fn validate(word: &str) -> ValidationReport {
    let script = detect_script(word);

    if word.trim().is_empty() {
        return ValidationReport::invalid(script, ValidationError::Empty);
    }

    let has_devanagari = word.chars().any(is_devanagari);
    let has_latin = word
        .chars()
        .any(|c| c.is_alphabetic() && !is_devanagari(c));
    if has_devanagari && has_latin {
        return ValidationReport::invalid(script, ValidationError::MixedScripts);
    }

    for (offset, ch) in word.char_indices() {
        let accepted = if is_devanagari(ch) {
            scheme::is_known_devanagari(ch)
        } else {
            is_separator(ch)
                || ch.is_ascii_digit()
                || is_iast_letter(ch)
                || is_iast_mark(ch)
                || (has_devanagari && JOINERS.contains(&ch))
        };
        if !accepted {
            return ValidationReport::invalid(
                script,
                ValidationError::UnsupportedCharacter { ch, offset },
            );
        }
    }

    let malformed = if has_devanagari {
        check_devanagari_marks(word)
    } else {
        check_latin_marks(word)
    };

    match malformed {
        Some((reason, offset)) => ValidationReport::invalid(
            script,
            ValidationError::MalformedSequence { reason, offset },
        ),
        None => ValidationReport::valid(script),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Prev {
    Nothing,
    Consonant,
    Sign,
    Muted,
    Letter,
}

fn check_devanagari_marks(word: &str) -> Option<(MalformedKind, usize)> {
    let mut prev = Prev::Nothing;

    for (offset, ch) in word.char_indices() {
        if JOINERS.contains(&ch) {
            continue;
        }

        prev = if scheme::is_consonant(ch) {
            Prev::Consonant
        } else if ch == NUKTA {
            if prev != Prev::Consonant {
                return Some((MalformedKind::OrphanMark, offset));
            }
            Prev::Consonant
        } else if scheme::is_vowel_sign(ch) || ch == VIRAMA {
            match prev {
                Prev::Consonant if ch == VIRAMA => Prev::Muted,
                Prev::Consonant => Prev::Sign,
                Prev::Sign | Prev::Muted => return Some((MalformedKind::StackedSigns, offset)),
                _ if ch == VIRAMA => return Some((MalformedKind::OrphanVirama, offset)),
                _ => return Some((MalformedKind::OrphanVowelSign, offset)),
            }
        } else if matches!(ch, 'ं' | 'ः' | 'ँ') {
            match prev {
                Prev::Nothing => return Some((MalformedKind::OrphanMark, offset)),
                Prev::Muted => return Some((MalformedKind::MarkAfterVirama, offset)),
                _ => Prev::Letter,
            }
        } else if scheme::vowel(ch).is_some() || ch == 'ॐ' {
            Prev::Letter
        } else {
            Prev::Nothing
        };
    }

    None
}

fn check_latin_marks(word: &str) -> Option<(MalformedKind, usize)> {
    let mut after_letter = false;

    for (offset, ch) in word.char_indices() {
        if is_combining_mark(ch) {
            if !after_letter {
                return Some((MalformedKind::OrphanCombiningMark, offset));
            }
        } else {
            after_letter = ch.is_alphabetic();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_words() {
        for word in [
            "राम",
            "कृष्णः",
            "रामं",
            "ऋषि",
            "सोऽहम्",
            "rāmaḥ",
            "deva-datta",
            "ra\u{0304}ma",
        ] {
            let report = validate(word);
            assert!(report.is_valid, "{word}: {:?}", report.error);
        }
    }

    #[test]
    fn test_empty_and_blank() {
        let report = validate("");
        assert!(!report.is_valid);
        assert_eq!(report.error, Some(ValidationError::Empty));
        assert!(report.reason().is_some());
        assert_eq!(validate("  \t").error, Some(ValidationError::Empty));
    }

    #[test]
    fn test_mixed_scripts() {
        assert_eq!(validate("kaक").error, Some(ValidationError::MixedScripts));
    }

    #[test]
    fn test_unsupported_characters() {
        assert_eq!(
            validate("xyz").error,
            Some(ValidationError::UnsupportedCharacter { ch: 'x', offset: 0 })
        );
        // Devanagari letter outside the classical inventory
        assert_eq!(
            validate("कळ").error,
            Some(ValidationError::UnsupportedCharacter { ch: 'ळ', offset: 3 })
        );
        assert!(matches!(
            validate("rāma!").error,
            Some(ValidationError::UnsupportedCharacter { ch: '!', .. })
        ));
    }

    #[test]
    fn test_orphan_vowel_sign() {
        assert_eq!(
            validate("ाम").error,
            Some(ValidationError::MalformedSequence {
                reason: MalformedKind::OrphanVowelSign,
                offset: 0
            })
        );
        // After an independent vowel
        assert!(matches!(
            validate("अि").error,
            Some(ValidationError::MalformedSequence {
                reason: MalformedKind::OrphanVowelSign,
                ..
            })
        ));
    }

    #[test]
    fn test_stacked_and_orphan_virama() {
        assert!(matches!(
            validate("काि").error,
            Some(ValidationError::MalformedSequence {
                reason: MalformedKind::StackedSigns,
                ..
            })
        ));
        assert!(matches!(
            validate("्क").error,
            Some(ValidationError::MalformedSequence {
                reason: MalformedKind::OrphanVirama,
                ..
            })
        ));
    }

    #[test]
    fn test_mark_after_virama() {
        for word in ["क्ं", "क्ः", "त्ँ"] {
            assert_eq!(
                validate(word).error,
                Some(ValidationError::MalformedSequence {
                    reason: MalformedKind::MarkAfterVirama,
                    offset: 6
                }),
                "{word}"
            );
        }
        // Marks on a vowel sign or a bare consonant are fine
        assert!(validate("कां").is_valid);
        assert!(validate("कं").is_valid);
        assert!(validate("सम्").is_valid);
    }

    #[test]
    fn test_orphan_marks() {
        assert!(matches!(
            validate("ंक").error,
            Some(ValidationError::MalformedSequence {
                reason: MalformedKind::OrphanMark,
                ..
            })
        ));
        assert!(matches!(
            validate("\u{0304}a").error,
            Some(ValidationError::MalformedSequence {
                reason: MalformedKind::OrphanCombiningMark,
                offset: 0
            })
        ));
    }
}
