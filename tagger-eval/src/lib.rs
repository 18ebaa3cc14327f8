//! Compares a tagger's output against a hand-annotated gold file and reports
//! precision, recall, and F1. Purely a comparison tool — it never re-runs
//! the matcher itself.

mod error;
mod report;

pub use error::EvalError;
pub use report::{evaluate, GoldSpan, Report};

use std::path::Path;

/// Reads and parses a gold annotation file (a JSON array of [`GoldSpan`]).
pub fn load_gold(path: impl AsRef<Path>) -> Result<Vec<GoldSpan>, EvalError> {
    let path_ref = path.as_ref();
    let raw = std::fs::read_to_string(path_ref).map_err(|source| EvalError::Io {
        path: path_ref.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| EvalError::Json {
        path: path_ref.display().to_string(),
        source,
    })
}
