//! Normalization and transliteration
//!
//! `normalize` is idempotent for every target script. It is not a lossless
//! round trip: vowel hiatus (क + इ reads back as कै), nukta and zero-width
//! joiners do not survive Devanagari → IAST → Devanagari.

use crate::scheme::{self, JOINERS, NUKTA, VIRAMA};
use crate::script::{detect_script, Script};
use unicode_normalization::UnicodeNormalization;

/// Normalize `word` into the canonical form of `target` (IAST by default)
///
/// [`Script::Unknown`] as a target is treated as IAST.
pub fn normalize(word: &str, target: Option<Script>) -> String {
    let target = match target {
        Some(Script::Devanagari) => Script::Devanagari,
        _ => Script::Iast,
    };

    match (detect_script(word), target) {
        (Script::Devanagari, Script::Devanagari) => canonical_devanagari(word),
        (Script::Devanagari, _) => {
            // Precomposed nukta letters split so the nukta can be skipped
            let decomposed: String = word.nfd().collect();
            canonical_iast(&devanagari_to_iast(&decomposed))
        }
        (_, Script::Devanagari) => canonical_devanagari(&iast_to_devanagari(&canonical_iast(word))),
        _ => canonical_iast(word),
    }
}

/// Canonical IAST: NFC, lowercase, `ṁ` folded to `ṃ`
pub fn canonical_iast(text: &str) -> String {
    text.nfc()
        .flat_map(char::to_lowercase)
        .nfc()
        .map(|c| if c == 'ṁ' { 'ṃ' } else { c })
        .collect()
}

/// Canonical Devanagari: NFC without zero-width joiners
pub fn canonical_devanagari(text: &str) -> String {
    text.chars()
        .filter(|c| !JOINERS.contains(c))
        .nfc()
        .collect()
}

/// Transliterate Devanagari codepoints to IAST
///
/// A consonant gets an explicit `a` unless a virama or vowel sign follows.
/// Codepoints outside the scheme are copied through.
pub fn devanagari_to_iast(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        i += 1;

        if let Some(consonant) = scheme::consonant(ch) {
            out.push_str(consonant);
            while chars.get(i) == Some(&NUKTA) {
                i += 1;
            }
            match chars.get(i).copied() {
                Some(VIRAMA) => i += 1,
                Some(next) => match scheme::vowel_sign(next) {
                    Some(vowel) => {
                        out.push_str(vowel);
                        i += 1;
                    }
                    None => out.push('a'),
                },
                None => out.push('a'),
            }
            continue;
        }

        if let Some(latin) = scheme::vowel(ch)
            .or_else(|| scheme::vowel_sign(ch))
            .or_else(|| scheme::mark(ch))
        {
            out.push_str(latin);
        } else if ch != VIRAMA && ch != NUKTA && !JOINERS.contains(&ch) {
            out.push(ch);
        }
    }

    out
}

enum Unit {
    Consonant(char),
    Vowel(char, Option<char>),
    Mark(char),
    Other(char),
}

/// Longest IAST unit at `i`, and how many chars it covers
fn next_unit(chars: &[char], i: usize) -> (Unit, usize) {
    if i + 1 < chars.len() {
        let pair: String = chars[i..i + 2].iter().collect();
        if let Some(unit) = lookup_unit(&pair) {
            return (unit, 2);
        }
    }
    let single = chars[i].to_string();
    (lookup_unit(&single).unwrap_or(Unit::Other(chars[i])), 1)
}

fn lookup_unit(unit: &str) -> Option<Unit> {
    if let Some(c) = scheme::consonant_for(unit) {
        return Some(Unit::Consonant(c));
    }
    if let Some((independent, sign)) = scheme::vowel_for(unit) {
        return Some(Unit::Vowel(independent, sign));
    }
    scheme::mark_for(unit).map(Unit::Mark)
}

/// Transliterate canonical IAST to Devanagari
///
/// A consonant followed by a vowel takes its sign (none for `a`); a consonant
/// followed by anything else takes a virama.
pub fn iast_to_devanagari(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 3);
    let mut open_consonant = false;
    let mut i = 0;

    while i < chars.len() {
        let (unit, width) = next_unit(&chars, i);
        i += width;

        match unit {
            Unit::Consonant(c) => {
                if open_consonant {
                    out.push(VIRAMA);
                }
                out.push(c);
                open_consonant = true;
            }
            Unit::Vowel(independent, sign) => {
                if open_consonant {
                    if let Some(sign) = sign {
                        out.push(sign);
                    }
                    open_consonant = false;
                } else {
                    out.push(independent);
                }
            }
            Unit::Mark(c) | Unit::Other(c) => {
                if open_consonant {
                    out.push(VIRAMA);
                    open_consonant = false;
                }
                out.push(c);
            }
        }
    }

    if open_consonant {
        out.push(VIRAMA);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_devanagari_to_iast_inherent_vowel() {
        assert_eq!(normalize("राम", None), "rāma");
        assert_eq!(normalize("रामः", None), "rāmaḥ");
        assert_eq!(normalize("कृष्ण", None), "kṛṣṇa");
        assert_eq!(normalize("भगवद्गीता", None), "bhagavadgītā");
    }

    #[test]
    fn test_devanagari_marks() {
        assert_eq!(normalize("संस्कृतम्", None), "saṃskṛtam");
        assert_eq!(normalize("सोऽहम्", None), "so'ham");
        assert_eq!(normalize("ॐ", None), "oṃ");
        assert_eq!(normalize("चँद", None), "cam\u{0310}da");
        assert_eq!(normalize("१२", None), "12");
    }

    #[test]
    fn test_iast_canonical_form() {
        assert_eq!(normalize("Rāmaḥ", None), "rāmaḥ");
        assert_eq!(normalize("ra\u{0304}ma", None), "rāma");
        assert_eq!(normalize("saṁskṛtam", None), "saṃskṛtam");
        assert_eq!(normalize("rāma", Some(Script::Iast)), "rāma");
    }

    #[test]
    fn test_iast_to_devanagari() {
        assert_eq!(normalize("rāmaḥ", Some(Script::Devanagari)), "रामः");
        assert_eq!(normalize("kṛṣṇa", Some(Script::Devanagari)), "कृष्ण");
        assert_eq!(normalize("saṃskṛtam", Some(Script::Devanagari)), "संस्कृतम्");
        assert_eq!(normalize("aiśvarya", Some(Script::Devanagari)), "ऐश्वर्य");
        assert_eq!(normalize("so'ham", Some(Script::Devanagari)), "सोऽहम्");
    }

    #[test]
    fn test_devanagari_target_keeps_devanagari() {
        assert_eq!(normalize("राम", Some(Script::Devanagari)), "राम");
        assert_eq!(normalize("क्\u{200D}ष", Some(Script::Devanagari)), "क्ष");
    }

    #[test]
    fn test_hiatus_is_not_round_trip() {
        let latin = normalize("कइ", None);
        assert_eq!(latin, "kai");
        assert_eq!(normalize(&latin, Some(Script::Devanagari)), "कै");
    }

    #[test]
    fn test_passthrough_and_empty() {
        assert_eq!(normalize("", None), "");
        assert_eq!(normalize("राम राम", None), "rāma rāma");
        assert_eq!(normalize("कळ", None), "kaळ");
        assert_eq!(normalize("XYZ", None), "xyz");
    }

    #[test]
    fn test_precomposed_nukta_letters_drop_nukta() {
        assert_eq!(normalize("\u{0958}", None), "ka");
        assert_eq!(normalize("\u{095B}रा", None), "jarā");
        assert_eq!(normalize("\u{0929}", Some(Script::Iast)), "na");
        assert_eq!(normalize("\u{095E}", None), normalize("फ\u{093C}", None));
    }

    #[test]
    fn test_idempotent_examples() {
        for word in [
            "राम",
            "कळ",
            "Rāmaḥ",
            "xyz",
            "क\u{093C}",
            "\u{0958}",
            "\u{095F}ा",
            "ाम",
            "kaक",
        ] {
            for target in [None, Some(Script::Iast), Some(Script::Devanagari)] {
                let once = normalize(word, target);
                assert_eq!(normalize(&once, target), once, "{word} -> {target:?}");
            }
        }
    }
}
