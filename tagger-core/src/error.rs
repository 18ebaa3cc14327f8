//! Error kinds for the matching engine.
//!
//! Malformed input and corpus build failures are hard errors with no partial
//! output; equal-length overlaps are not errors at all — see
//! [`crate::overlap::OverlapWarning`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("input token sequence is empty")]
    EmptyOrInvalidTokens,

    #[error("qur'an corpus is empty")]
    EmptyCorpus,

    #[error("failed to build index: {0}")]
    IndexBuild(String),

    #[error("tagging was cancelled")]
    Cancelled,
}
