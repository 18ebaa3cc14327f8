//! Matching engine for locating Qur'anic quotations inside Arabic-script
//! prose: normalize, seed, extend, (optionally) bridge ellipses, resolve
//! overlaps, emit. See [`Engine::tag`] for the single entry point.
//!
//! The engine is a pure, single-threaded function of its inputs: building an
//! [`Engine`] normalizes the Qur'an corpus once; every subsequent `tag()`
//! call is read-only and produces the same output for the same input.

pub mod ellipsis;
pub mod error;
pub mod extend;
pub mod index;
pub mod normalize;
pub mod overlap;
pub mod seed;
pub mod stopwords;
pub mod tag;

pub use ellipsis::extend_with_ellipsis;
pub use error::TagError;
pub use extend::{extend, Candidate};
pub use index::{Index, QMeta, QPos, Token};
pub use normalize::{normalize, Letterblock, NormForm};
pub use overlap::{resolve, OverlapWarning};
pub use seed::{find_seeds, Seed};
pub use stopwords::{StopwordPolicy, StopwordSet};
pub use tag::{Engine, Match, TagOptions, TagOutcome};
