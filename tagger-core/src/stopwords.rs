//! Stopword filter: rejects a seed whose anchor word is a high-frequency
//! Arabic function word. Pure set membership over [`NormForm`]s.
//!
//! Two lists ship: a small conservative `Internal` list and the larger
//! `Leeds` list (after the Leeds Arabic corpus frequency list), which is the
//! default. Neither is "the" correct list — the choice materially shifts
//! precision/recall and is left as a configuration option.

use std::collections::HashSet;

use crate::normalize::{normalize, NormForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwordPolicy {
    Internal,
    Leeds,
}

impl Default for StopwordPolicy {
    fn default() -> Self {
        StopwordPolicy::Leeds
    }
}

/// An immutable, pre-normalized set of stopword forms.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<NormForm>,
}

impl StopwordSet {
    pub fn build(policy: StopwordPolicy) -> Self {
        let raw: &[&str] = match policy {
            StopwordPolicy::Internal => INTERNAL_STOPWORDS,
            StopwordPolicy::Leeds => LEEDS_STOPWORDS,
        };
        let words = raw
            .iter()
            .map(|w| normalize(w))
            .filter(|nf| !nf.is_empty())
            .collect();
        Self { words }
    }

    /// Builds a `StopwordSet` from an arbitrary word list, useful for hosts
    /// that want to supply their own curated list instead of the two shipped
    /// defaults.
    pub fn from_words<I: IntoIterator<Item = S>, S: AsRef<str>>(words: I) -> Self {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|nf| !nf.is_empty())
            .collect();
        Self { words }
    }

    pub fn is_stopword(&self, nf: &NormForm) -> bool {
        self.words.contains(nf)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A conservative, high-confidence set of function words.
const INTERNAL_STOPWORDS: &[&str] = &[
    "من", "إلى", "على", "في", "عن", "مع", "إن", "أن", "لا", "لم", "لن", "ما", "لو", "إذا", "ثم",
    "أو", "بل", "قد", "هذا", "هذه", "ذلك", "تلك", "الذي", "التي", "كان", "هو", "هي", "الله",
];

/// The larger Leeds-derived stopword list (shipped default). A superset of
/// [`INTERNAL_STOPWORDS`] plus additional high-frequency closed-class words,
/// pronouns, and particles.
const LEEDS_STOPWORDS: &[&str] = &[
    "من", "إلى", "على", "في", "عن", "مع", "إن", "أن", "لا", "لم", "لن", "ما", "لو", "إذا", "ثم",
    "أو", "بل", "قد", "هذا", "هذه", "ذلك", "تلك", "هؤلاء", "أولئك", "الذي", "التي", "الذين",
    "اللاتي", "اللواتي", "كان", "كانت", "يكون", "تكون", "هو", "هي", "هم", "هن", "أنت", "أنتم",
    "أنتن", "أنا", "نحن", "الله", "إذ", "إذن", "أم", "بعد", "قبل", "بين", "عند", "حتى", "غير",
    "كل", "بعض", "سوف", "قال", "قالوا", "فإن", "وإن", "وما", "ولا", "فلا", "منه", "منها", "عليه",
    "عليها", "فيه", "فيها", "به", "لها", "له", "لهم", "لهن", "ذا", "ذي", "أي", "كما", "ألا",
];
