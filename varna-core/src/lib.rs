//! Multi-script Sanskrit phonological analysis
//!
//! This crate answers the phonological questions grammar rules ask about a
//! word written in Devanagari or IAST: which script it uses, whether it is
//! well formed, what its phonemes are, and which of them are savarna
//! (homorganic) or share an articulation place.
//!
//! # Architecture
//!
//! - **Script detection** ([`detect_script`]) is the single place that looks
//!   at character ranges.
//! - **Validation** ([`validate`]) is advisory and never blocks analysis.
//! - **Normalization** ([`normalize`]) produces an idempotent canonical form
//!   in either script.
//! - **Tokenization** ([`tokenize`]) segments words over the tables by
//!   greedy longest match.
//! - **Tables** ([`PhonologyTables`]) are immutable TOML literal data,
//!   embedded at compile time and built once per process.
//! - **Queries** ([`Classifier`] and the free functions) read only the
//!   tables.
//!
//! # Example
//!
//! ```rust
//! use varna_core::{are_homorganic, articulation_place_of, detect_script, normalize};
//! use varna_core::{Place, Script};
//!
//! assert_eq!(detect_script("क"), Script::Devanagari);
//! assert!(are_homorganic("क", "ख"));
//! assert!(!are_homorganic("क", "च"));
//! assert_eq!(articulation_place_of("त"), Some(Place::Dental));
//! assert_eq!(normalize("रामः", None), "rāmaḥ");
//! ```

pub mod classify;
pub mod error;
pub mod normalize;
pub mod phoneme;
pub mod scheme;
pub mod script;
pub mod tables;
pub mod tokenize;
pub mod validate;
pub mod word;

pub use classify::{
    are_homorganic, articulation_place_of, classify, equivalence_class_of, Classification,
    Classifier,
};
pub use error::{Result, TableError};
pub use normalize::{canonical_devanagari, canonical_iast, normalize};
pub use phoneme::{Category, ClassId, Phoneme, Place};
pub use script::{detect_script, Script};
pub use tables::{ParityIssue, ParityKind, PhonologyTables, SavarnaClass, ScriptTable};
pub use tokenize::{reassemble, tokenize, Tokenizer};
pub use validate::{validate, MalformedKind, ValidationError, ValidationReport};
pub use word::Word;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_exports() {
        let word = Word::analyze("kṛṣṇa");
        assert_eq!(word.script, Script::Iast);
        assert!(word.is_valid());
        assert_eq!(reassemble(&word.phonemes), "kṛṣṇa");

        let classification = classify("kh");
        assert_eq!(classification.class_name(), Some("ka-varga"));
    }
}
