//! Loads a Tanzīl-format Qur'an corpus into the `(Token, QMeta)` pairs that
//! `tagger_core::Index::build` consumes.

mod error;
mod parse;
mod sample;

use std::path::Path;

use tagger_core::{QMeta, Token};

pub use error::CorpusError;

/// Loads the small bundled sample corpus (al-Fātiḥa, al-Ikhlāṣ, al-Falaq,
/// an-Nās, Ghāfir 40:77). Intended for demos and tests, not production use.
pub fn load_default() -> Vec<(Token, QMeta)> {
    parse::parse(sample::RAW).expect("bundled sample corpus is well-formed")
}

/// Parses a Tanzīl-format corpus already held in memory.
pub fn load_from_str(raw: &str) -> Result<Vec<(Token, QMeta)>, CorpusError> {
    parse::parse(raw)
}

/// Reads and parses a Tanzīl-format corpus file from disk.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<(Token, QMeta)>, CorpusError> {
    let raw = std::fs::read_to_string(path)?;
    parse::parse(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_sample_corpus_loads() {
        let words = load_default();
        assert!(!words.is_empty());
        assert_eq!(words[0].0, "بسم");
        assert_eq!(words[0].1, QMeta::new(1, 1, 1));
    }

    #[test]
    fn bundled_sample_corpus_contains_the_ghafir_scenario_bigram() {
        let words = load_default();
        let pos = words.iter().position(|(t, _)| t == "نرينك").unwrap();
        assert_eq!(words[pos + 1].0, "بعض");
    }

    #[test]
    fn load_from_str_rejects_malformed_input() {
        let err = load_from_str("garbage").unwrap_err();
        assert!(matches!(err, CorpusError::Malformed { .. }));
    }
}
