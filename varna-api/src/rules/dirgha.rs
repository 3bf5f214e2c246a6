//! 6.1.101 akaḥ savarṇe dīrghaḥ

use super::{RuleContext, RulePredicate, RuleVerdict};
use crate::Analyzer;
use varna_core::{normalize, validate, Phoneme, Script};

/// Simple vowels (ak) and the long vowel each merges into
const AK: &[(&str, &str)] = &[
    ("a", "ā"),
    ("ā", "ā"),
    ("i", "ī"),
    ("ī", "ī"),
    ("u", "ū"),
    ("ū", "ū"),
    ("ṛ", "ṝ"),
    ("ṝ", "ṝ"),
    ("ḷ", "ḹ"),
    ("ḹ", "ḹ"),
];

fn long_of(vowel: &str) -> Option<&'static str> {
    AK.iter().find(|(v, _)| *v == vowel).map(|(_, long)| *long)
}

/// Final simple vowel + savarna initial vowel merge into the long vowel
///
/// Reads the following word from the context field `next`. Both words are
/// compared in IAST; the joined form is reported in both scripts.
#[derive(Debug, Clone, Default)]
pub struct SavarnaDirghaRule {
    analyzer: Analyzer,
}

impl SavarnaDirghaRule {
    /// Predicate over the analyzer's tables
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    fn units(&self, text: &str) -> (String, Vec<Phoneme>) {
        let latin = normalize(text.trim(), Some(Script::Iast));
        let units = self.analyzer.tokenizer().tokenize(&latin);
        (latin, units)
    }
}

impl RulePredicate for SavarnaDirghaRule {
    fn id(&self) -> &str {
        "6.1.101"
    }

    fn name(&self) -> &str {
        "akaḥ savarṇe dīrghaḥ"
    }

    fn evaluate(&self, word: &str, context: &RuleContext) -> RuleVerdict {
        let Some(next) = context.get_str("next") else {
            return RuleVerdict::undecidable("context has no 'next' word");
        };

        let (left_text, left) = self.units(word);
        let (right_text, right) = self.units(next);
        let (Some(last), Some(first)) = (left.last(), right.first()) else {
            return RuleVerdict::undecidable("both words must be non-empty");
        };

        let valid = validate(word).is_valid && validate(next).is_valid;
        let confidence = self.analyzer.confidence(valid);

        let Some(long) = long_of(&last.grapheme) else {
            return RuleVerdict::rejects(
                confidence,
                format!("{left_text} does not end in a simple vowel"),
            );
        };
        if !first.is_vowel() {
            return RuleVerdict::rejects(
                confidence,
                format!("{right_text} does not begin with a vowel"),
            );
        }
        if !self.analyzer.classifier().phonemes_homorganic(last, first) {
            return RuleVerdict::rejects(
                confidence,
                format!("{} and {} are not savarna", last.grapheme, first.grapheme),
            );
        }

        let joined = format!(
            "{}{}{}",
            &left_text[..last.offset],
            long,
            &right_text[first.offset + first.len()..]
        );

        RuleVerdict::applies(
            confidence,
            format!("{} + {} becomes {long}", last.grapheme, first.grapheme),
        )
        .with_detail("long_vowel", long)
        .with_detail("joined", joined.as_str())
        .with_detail("joined_devanagari", normalize(&joined, Some(Script::Devanagari)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(word: &str, next: &str) -> RuleVerdict {
        SavarnaDirghaRule::default().evaluate(word, &RuleContext::new().with("next", next))
    }

    #[test]
    fn test_merges_savarna_vowels() {
        let verdict = eval("deva", "ālaya");
        assert!(verdict.applies);
        assert_eq!(verdict.confidence, 1.0);
        assert_eq!(verdict.details["long_vowel"], "ā");
        assert_eq!(verdict.details["joined"], "devālaya");
        assert_eq!(verdict.details["joined_devanagari"], "देवालय");

        assert_eq!(eval("dadhi", "indra").details["joined"], "dadhīndra");
        assert_eq!(eval("guru", "upadeśa").details["joined"], "gurūpadeśa");
    }

    #[test]
    fn test_devanagari_input() {
        let verdict = eval("देव", "आलय");
        assert!(verdict.applies);
        assert_eq!(verdict.details["joined"], "devālaya");
    }

    #[test]
    fn test_not_savarna() {
        let verdict = eval("deva", "indra");
        assert!(!verdict.applies);
        assert_eq!(verdict.confidence, 1.0);
        assert!(!eval("rāmaḥ", "atra").applies);
        assert!(!eval("deva", "loka").applies);
    }

    #[test]
    fn test_missing_next_is_undecidable() {
        let verdict = SavarnaDirghaRule::default().evaluate("deva", &RuleContext::new());
        assert!(!verdict.applies);
        assert_eq!(verdict.confidence, 0.0);
    }

    #[test]
    fn test_invalid_input_lowers_confidence() {
        let verdict = eval("xa", "a");
        assert!(verdict.applies);
        assert_eq!(verdict.confidence, 0.5);
    }
}
