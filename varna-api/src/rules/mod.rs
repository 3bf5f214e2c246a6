//! Grammar-rule predicate boundary
//!
//! A rule predicate looks at a word plus a free-form context and returns a
//! [`RuleVerdict`]. Confidence follows one convention across predicates:
//! `1.0` when the input validated, the analyzer's best-effort factor when it
//! did not, and `0.0` when the predicate cannot decide at all.

mod dirgha;
mod savarna;

pub use dirgha::SavarnaDirghaRule;
pub use savarna::SavarnaRule;

use crate::error::{ApiError, Result};
use crate::Analyzer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form context passed to a rule predicate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleContext {
    fields: Map<String, Value>,
}

impl RuleContext {
    /// Empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Context from a JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ApiError::Context(format!("expected an object, got {other}"))),
        }
    }

    /// Context from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Add a field
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a field
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Raw field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String field
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Boolean field
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Numeric field
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    /// Whether the context has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Outcome of evaluating a rule predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleVerdict {
    /// Whether the rule applies
    pub applies: bool,
    /// Heuristic confidence in `0.0..=1.0`
    pub confidence: f64,
    /// Short human readable explanation
    pub reason: String,
    /// Rule-specific fields
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl RuleVerdict {
    /// The rule applies
    pub fn applies(confidence: f64, reason: impl Into<String>) -> Self {
        Self {
            applies: true,
            confidence,
            reason: reason.into(),
            details: Map::new(),
        }
    }

    /// The rule does not apply
    pub fn rejects(confidence: f64, reason: impl Into<String>) -> Self {
        Self {
            applies: false,
            confidence,
            reason: reason.into(),
            details: Map::new(),
        }
    }

    /// The predicate cannot decide
    pub fn undecidable(reason: impl Into<String>) -> Self {
        Self::rejects(0.0, reason)
    }

    /// Attach a rule-specific field
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

/// A grammar-rule predicate
pub trait RulePredicate: Send + Sync {
    /// Stable identifier, conventionally the sutra number
    fn id(&self) -> &str;

    /// Human readable name
    fn name(&self) -> &str;

    /// Evaluate the rule for `word`
    fn evaluate(&self, word: &str, context: &RuleContext) -> RuleVerdict;
}

/// Registered predicates in insertion order
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<Box<dyn RulePredicate>>,
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.ids().collect::<Vec<_>>())
            .finish()
    }
}

impl RuleRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in savarna predicates
    pub fn with_defaults(analyzer: &Analyzer) -> Self {
        let mut registry = Self::new();
        registry.register(SavarnaRule::new(analyzer.clone()));
        registry.register(SavarnaDirghaRule::new(analyzer.clone()));
        registry
    }

    /// Add a predicate; a predicate with the same id is replaced
    pub fn register<R: RulePredicate + 'static>(&mut self, rule: R) {
        if let Some(pos) = self.rules.iter().position(|r| r.id() == rule.id()) {
            log::warn!("replacing rule predicate {}", rule.id());
            self.rules[pos] = Box::new(rule);
        } else {
            self.rules.push(Box::new(rule));
        }
    }

    /// Predicate by id
    pub fn get(&self, id: &str) -> Option<&dyn RulePredicate> {
        self.rules.iter().find(|r| r.id() == id).map(|r| r.as_ref())
    }

    /// Registered ids
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.id())
    }

    /// Number of predicates
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate one predicate
    pub fn evaluate(&self, id: &str, word: &str, context: &RuleContext) -> Option<RuleVerdict> {
        self.get(id).map(|rule| rule.evaluate(word, context))
    }

    /// Evaluate every predicate
    pub fn evaluate_all(&self, word: &str, context: &RuleContext) -> Vec<(&str, RuleVerdict)> {
        self.rules
            .iter()
            .map(|rule| (rule.id(), rule.evaluate(word, context)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Always;

    impl RulePredicate for Always {
        fn id(&self) -> &str {
            "0.0.0"
        }

        fn name(&self) -> &str {
            "always"
        }

        fn evaluate(&self, _word: &str, _context: &RuleContext) -> RuleVerdict {
            RuleVerdict::applies(1.0, "always applies")
        }
    }

    #[test]
    fn test_context_getters() {
        let ctx = RuleContext::from_value(json!({"next": "ālaya", "pada": true, "n": 2}))
            .unwrap();
        assert_eq!(ctx.get_str("next"), Some("ālaya"));
        assert_eq!(ctx.get_bool("pada"), Some(true));
        assert_eq!(ctx.get_f64("n"), Some(2.0));
        assert_eq!(ctx.get_str("n"), None);
        assert!(RuleContext::from_value(json!([1, 2])).is_err());
    }

    #[test]
    fn test_verdict_details_flattened() {
        let verdict = RuleVerdict::applies(1.0, "ok").with_detail("class", "ka-varga");
        let value = serde_json::to_value(&verdict).unwrap();
        assert_eq!(value["class"], "ka-varga");
        assert_eq!(value["applies"], true);
    }

    #[test]
    fn test_registry_replaces_by_id() {
        let mut registry = RuleRegistry::new();
        registry.register(Always);
        registry.register(Always);
        assert_eq!(registry.len(), 1);
        assert!(registry.evaluate("0.0.0", "x", &RuleContext::new()).is_some());
        assert!(registry.evaluate("9.9.9", "x", &RuleContext::new()).is_none());
    }
}
