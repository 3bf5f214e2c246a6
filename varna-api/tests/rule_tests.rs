//! Rule predicates through the registry

use serde_json::json;
use varna_api::rules::{SavarnaDirghaRule, SavarnaRule};
use varna_api::*;

#[test]
fn test_default_registry() {
    let registry = RuleRegistry::with_defaults(&Analyzer::new());
    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["1.1.9", "6.1.101"]);
    assert_eq!(
        registry.get("6.1.101").map(|r| r.name()),
        Some("akaḥ savarṇe dīrghaḥ")
    );
}

#[test]
fn test_evaluate_all() {
    let registry = RuleRegistry::with_defaults(&Analyzer::new());
    let ctx = RuleContext::from_value(json!({ "next": "indra" })).unwrap();
    let verdicts = registry.evaluate_all("dadhi", &ctx);
    assert_eq!(verdicts.len(), 2);

    let (id, dirgha) = &verdicts[1];
    assert_eq!(*id, "6.1.101");
    assert!(dirgha.applies);
    assert_eq!(dirgha.details["joined"], "dadhīndra");
}

#[test]
fn test_verdict_json_shape() {
    let rule = SavarnaRule::default();
    let ctx = RuleContext::from_json(r#"{"first": "t", "second": "dh"}"#).unwrap();
    let value = serde_json::to_value(rule.evaluate("", &ctx)).unwrap();
    assert_eq!(value["applies"], true);
    assert_eq!(value["confidence"], 1.0);
    assert_eq!(value["class"], "ta-varga");
    assert_eq!(value["place"], "dental");
}

#[test]
fn test_cross_script_pair_is_not_savarna() {
    let rule = SavarnaRule::default();
    let ctx = RuleContext::new().with("first", "क").with("second", "k");
    let verdict = rule.evaluate("", &ctx);
    assert!(!verdict.applies);
    assert_eq!(verdict.confidence, 1.0);
}

#[test]
fn test_best_effort_factor_from_config() {
    let config = Config::builder().best_effort_factor(0.25).build().unwrap();
    let analyzer = Analyzer::with_config(config).unwrap();
    let rule = SavarnaDirghaRule::new(analyzer);
    let verdict = rule.evaluate("xa", &RuleContext::new().with("next", "ā"));
    assert!(verdict.applies);
    assert_eq!(verdict.confidence, 0.25);
}
