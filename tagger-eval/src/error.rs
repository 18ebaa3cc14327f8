//! Errors raised while comparing tagger output against gold annotations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path} as JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
