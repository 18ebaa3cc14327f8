//! Errors raised while parsing a Tanzīl-format corpus file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("line {line}: expected `surah|verse|text`, got {content:?}")]
    Malformed { line: usize, content: String },

    #[error("line {line}: surah/verse position does not follow recitation order")]
    NonMonotonicPosition { line: usize },

    #[error("line {line}: verse text has no words")]
    EmptyVerse { line: usize },

    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),
}
