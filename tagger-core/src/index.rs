//! The Qur'an index: a built-once, immutable data structure mapping a
//! normalized word bigram to every Qur'anic position at which it occurs.
//!
//! Construction is the only place the Qur'an's own words are normalized;
//! lookups at tag time compare already-normalized input against the stored
//! forms without re-normalizing, since normalization is idempotent but
//! costly to repeat.

use std::collections::HashMap;

use crate::error::TagError;
use crate::normalize::{normalize, NormForm};

/// A unit of input or Qur'an text: an opaque Arabic-script word.
pub type Token = String;

/// A zero-based word index into the canonical Qur'an, ordered by
/// (surah, verse, word-in-verse).
pub type QPos = usize;

/// The (surah, verse, word-in-verse) triple a [`QPos`] denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QMeta {
    pub surah: u16,
    pub verse: u16,
    pub word_in_verse: u16,
}

impl QMeta {
    pub fn new(surah: u16, verse: u16, word_in_verse: u16) -> Self {
        Self {
            surah,
            verse,
            word_in_verse,
        }
    }
}

/// The built-once, immutable Qur'an index.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Index {
    q: Vec<NormForm>,
    meta: Vec<QMeta>,
    bigrams: HashMap<(NormForm, NormForm), Vec<QPos>>,
}

impl Index {
    /// Builds the index from a corpus-ordered sequence of (token, position)
    /// pairs, normalizing every Qur'an token exactly once.
    pub fn build(words: &[(Token, QMeta)]) -> Result<Self, TagError> {
        if words.is_empty() {
            return Err(TagError::EmptyCorpus);
        }

        let mut q = Vec::with_capacity(words.len());
        let mut meta = Vec::with_capacity(words.len());
        for (tok, m) in words {
            q.push(normalize(tok));
            meta.push(*m);
        }

        let mut bigrams: HashMap<(NormForm, NormForm), Vec<QPos>> = HashMap::new();
        for i in 0..q.len().saturating_sub(1) {
            bigrams
                .entry((q[i].clone(), q[i + 1].clone()))
                .or_default()
                .push(i);
        }

        Ok(Self { q, meta, bigrams })
    }

    pub fn len(&self) -> usize {
        self.q.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }

    pub fn word(&self, pos: QPos) -> Option<&NormForm> {
        self.q.get(pos)
    }

    pub fn meta(&self, pos: QPos) -> Option<QMeta> {
        self.meta.get(pos).copied()
    }

    /// Linear lookup from a (surah, verse, word-in-verse) triple back to its
    /// `QPos`. Used only by hosts rendering references, never by the hot
    /// matching path.
    pub fn qpos_of(&self, meta: QMeta) -> Option<QPos> {
        self.meta.iter().position(|m| *m == meta)
    }

    pub fn lookup_bigram(&self, a: &NormForm, b: &NormForm) -> Option<&[QPos]> {
        self.bigrams.get(&(a.clone(), b.clone())).map(Vec::as_slice)
    }
}
