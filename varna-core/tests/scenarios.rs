//! End-to-end scenarios over the embedded tables

use varna_core::{
    are_homorganic, articulation_place_of, classify, detect_script, normalize, tokenize, validate,
    Place, Script, ValidationError, Word,
};

#[test]
fn test_script_detection() {
    assert_eq!(detect_script("क"), Script::Devanagari);
    assert_eq!(detect_script("ka"), Script::Iast);
    assert_eq!(detect_script("kṛṣṇa"), Script::Iast);
    assert_eq!(detect_script(""), Script::Unknown);
    assert_eq!(detect_script("123"), Script::Unknown);
}

#[test]
fn test_varga_membership() {
    assert!(are_homorganic("क", "ख"));
    assert!(!are_homorganic("क", "च"));
    assert!(are_homorganic("ख", "क"));
    assert!(are_homorganic("kh", "g"));
}

#[test]
fn test_articulation_places() {
    assert_eq!(articulation_place_of("त"), Some(Place::Dental));
    assert_eq!(articulation_place_of("प"), Some(Place::Labial));
    assert_eq!(articulation_place_of("t"), Some(Place::Dental));
    assert_eq!(articulation_place_of("p"), Some(Place::Labial));
}

#[test]
fn test_unknown_phoneme_classification() {
    let c = classify("xyz");
    assert!(c.equivalence_class.is_none());
    assert!(c.articulation_place.is_none());
    assert!(!c.is_vowel);
    assert!(!c.is_consonant);
}

#[test]
fn test_empty_input() {
    let report = validate("");
    assert!(!report.is_valid);
    assert_eq!(report.error, Some(ValidationError::Empty));
    assert!(report.reason().is_some());
    assert!(tokenize("").is_empty());
}

#[test]
fn test_pipeline_across_scripts() {
    let native = Word::analyze("कृष्णः");
    let latin = Word::analyze(&normalize("कृष्णः", None));
    assert_eq!(latin.text, "kṛṣṇaḥ");

    let native_places: Vec<_> = native.letters().map(|p| p.place).collect();
    let latin_places: Vec<_> = latin
        .letters()
        .filter(|p| p.grapheme != "a")
        .map(|p| p.place)
        .collect();
    assert_eq!(native_places, latin_places);
}

#[test]
fn test_totality_on_odd_input() {
    for text in ["", " ", "123", "!?", "॥", "\u{200D}", "क्\u{200D}"] {
        let _ = classify(text);
        let _ = tokenize(text);
        let _ = normalize(text, Some(Script::Devanagari));
        let _ = validate(text);
    }
}
