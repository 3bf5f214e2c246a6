//! 1.1.9 tulyāsyaprayatnaṃ savarṇam

use super::{RuleContext, RulePredicate, RuleVerdict};
use crate::Analyzer;
use varna_core::validate;

/// Are two phonemes savarna?
///
/// The pair comes from the context fields `first` and `second` when both
/// are present, else from the first two letters of the word.
#[derive(Debug, Clone, Default)]
pub struct SavarnaRule {
    analyzer: Analyzer,
}

impl SavarnaRule {
    /// Predicate over the analyzer's tables
    pub fn new(analyzer: Analyzer) -> Self {
        Self { analyzer }
    }

    fn pair(&self, word: &str, context: &RuleContext) -> Option<(String, String, bool)> {
        if let (Some(first), Some(second)) = (context.get_str("first"), context.get_str("second"))
        {
            let valid = validate(first).is_valid && validate(second).is_valid;
            return Some((first.to_string(), second.to_string(), valid));
        }

        let analyzed = self.analyzer.word(word);
        let mut letters = analyzed.letters();
        let first = letters.next()?.grapheme.clone();
        let second = letters.next()?.grapheme.clone();
        Some((first, second, analyzed.is_valid()))
    }
}

impl RulePredicate for SavarnaRule {
    fn id(&self) -> &str {
        "1.1.9"
    }

    fn name(&self) -> &str {
        "tulyāsyaprayatnaṃ savarṇam"
    }

    fn evaluate(&self, word: &str, context: &RuleContext) -> RuleVerdict {
        let Some((first, second, valid)) = self.pair(word, context) else {
            return RuleVerdict::undecidable("need two phonemes to compare");
        };

        let classifier = self.analyzer.classifier();
        let Some(class) = classifier.equivalence_class_of(&first) else {
            return RuleVerdict::undecidable(format!("{first} is not classified"));
        };
        if classifier.equivalence_class_of(&second).is_none() {
            return RuleVerdict::undecidable(format!("{second} is not classified"));
        }

        let confidence = self.analyzer.confidence(valid);
        let verdict = if classifier.are_homorganic(&first, &second) {
            RuleVerdict::applies(confidence, format!("{first} and {second} are savarna"))
        } else {
            RuleVerdict::rejects(confidence, format!("{first} and {second} are not savarna"))
        };

        verdict
            .with_detail("first", first)
            .with_detail("second", second)
            .with_detail("class", class.name())
            .with_detail("place", class.place().map(|p| p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_pair() {
        let rule = SavarnaRule::default();
        let ctx = RuleContext::new().with("first", "क").with("second", "घ");
        let verdict = rule.evaluate("", &ctx);
        assert!(verdict.applies);
        assert_eq!(verdict.confidence, 1.0);
        assert_eq!(verdict.details["class"], "ka-varga");
        assert_eq!(verdict.details["place"], "guttural");
    }

    #[test]
    fn test_word_pair() {
        let rule = SavarnaRule::default();
        // First two letters are t and th
        assert!(rule.evaluate("ttha", &RuleContext::new()).applies);
        assert!(!rule.evaluate("rāma", &RuleContext::new()).applies);
    }

    #[test]
    fn test_undecidable() {
        let rule = SavarnaRule::default();
        let verdict = rule.evaluate("a", &RuleContext::new());
        assert!(!verdict.applies);
        assert_eq!(verdict.confidence, 0.0);

        let ctx = RuleContext::new().with("first", "ḥ").with("second", "ḥ");
        assert_eq!(rule.evaluate("", &ctx).confidence, 0.0);
    }
}
