//! Seed finder: scans consecutive input bigrams and emits candidate seeds by
//! index lookup, rejecting any seed whose anchor (first) word is a stopword.

use crate::index::{Index, QPos};
use crate::normalize::NormForm;
use crate::stopwords::StopwordSet;

/// A bigram hit that anchors a candidate match: `input_pos` is the position
/// of the first of the two matched input words, `qpos` the position of the
/// corresponding first Qur'an word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub input_pos: usize,
    pub qpos: QPos,
}

/// `norm` must already be the memoized, per-token normalization of the input,
/// shared with the extender that consumes the seeds this produces.
pub fn find_seeds(norm: &[NormForm], index: &Index, stopwords: &StopwordSet) -> Vec<Seed> {
    let mut seeds = Vec::new();
    if norm.len() < 2 {
        return seeds;
    }
    for i in 0..norm.len() - 1 {
        let a = &norm[i];
        let b = &norm[i + 1];
        if a.is_empty() || b.is_empty() {
            continue;
        }
        if stopwords.is_stopword(a) {
            continue;
        }
        if let Some(positions) = index.lookup_bigram(a, b) {
            seeds.extend(positions.iter().map(|&qpos| Seed { input_pos: i, qpos }));
        }
    }
    seeds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::QMeta;
    use crate::normalize::normalize;
    use crate::stopwords::StopwordPolicy;
    use pretty_assertions::assert_eq;

    fn index() -> Index {
        Index::build(&[
            ("الله".to_string(), QMeta::new(1, 1, 1)),
            ("أكبر".to_string(), QMeta::new(1, 1, 2)),
            ("نرينك".to_string(), QMeta::new(40, 77, 1)),
            ("بعض".to_string(), QMeta::new(40, 77, 2)),
        ])
        .unwrap()
    }

    #[test]
    fn stopword_anchored_bigram_is_not_seeded() {
        let idx = index();
        let stopwords = StopwordSet::build(StopwordPolicy::Leeds);
        let norm: Vec<NormForm> = ["الله", "أكبر"].iter().map(|t| normalize(t)).collect();
        assert!(find_seeds(&norm, &idx, &stopwords).is_empty());
    }

    #[test]
    fn content_bigram_is_seeded() {
        let idx = index();
        let stopwords = StopwordSet::build(StopwordPolicy::Leeds);
        let norm: Vec<NormForm> = ["نرينك", "بعض"].iter().map(|t| normalize(t)).collect();
        let seeds = find_seeds(&norm, &idx, &stopwords);
        assert_eq!(seeds, vec![Seed { input_pos: 0, qpos: 2 }]);
    }

    #[test]
    fn short_input_yields_no_seeds() {
        let idx = index();
        let stopwords = StopwordSet::build(StopwordPolicy::Leeds);
        let norm: Vec<NormForm> = ["نرينك"].iter().map(|t| normalize(t)).collect();
        assert!(find_seeds(&norm, &idx, &stopwords).is_empty());
    }
}
