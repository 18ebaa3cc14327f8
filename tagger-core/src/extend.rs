//! Extender: grows a seed in both directions as long as input and Qur'an
//! words agree under normalization, producing a maximal candidate span.

use crate::index::{Index, QPos};
use crate::normalize::NormForm;
use crate::seed::Seed;

/// A candidate match produced by extension. Lives only during a single
/// `tag()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub input_start: usize,
    pub input_end: usize,
    pub qpos_start: QPos,
    pub qpos_end: QPos,
    /// Ranges `[start, end)` of input positions skipped by the ellipsis
    /// handler; empty unless ellipsis is enabled and a gap was bridged.
    pub ellipsis_gaps: Vec<(usize, usize)>,
}

impl Candidate {
    /// Matched-word count, excluding any ellipsis gap words.
    pub fn length(&self) -> usize {
        let span = self.input_end + 1 - self.input_start;
        let gap_len: usize = self.ellipsis_gaps.iter().map(|(s, e)| e - s).sum();
        span - gap_len
    }
}

/// Extends `seed` with no ellipsis tolerance: a single mismatch in either
/// direction stops growth.
pub fn extend(seed: Seed, input: &[NormForm], index: &Index) -> Candidate {
    let i = seed.input_pos;
    let j = seed.qpos;

    let mut input_end = i + 1;
    let mut qpos_end = j + 1;
    loop {
        let k = input_end + 1;
        let m = qpos_end + 1;
        if k >= input.len() || m >= index.len() {
            break;
        }
        if input[k] != *index.word(m).expect("m < index.len()") {
            break;
        }
        input_end = k;
        qpos_end = m;
    }

    let mut input_start = i;
    let mut qpos_start = j;
    loop {
        if input_start == 0 || qpos_start == 0 {
            break;
        }
        let k = input_start - 1;
        let m = qpos_start - 1;
        if input[k] != *index.word(m).expect("m < index.len()") {
            break;
        }
        input_start = k;
        qpos_start = m;
    }

    Candidate {
        input_start,
        input_end,
        qpos_start,
        qpos_end,
        ellipsis_gaps: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::QMeta;
    use crate::normalize::normalize;
    use pretty_assertions::assert_eq;

    fn index() -> Index {
        Index::build(&[
            ("الحمد".to_string(), QMeta::new(1, 2, 1)),
            ("لله".to_string(), QMeta::new(1, 2, 2)),
            ("رب".to_string(), QMeta::new(1, 2, 3)),
            ("العالمين".to_string(), QMeta::new(1, 2, 4)),
        ])
        .unwrap()
    }

    #[test]
    fn extends_to_full_verse() {
        let idx = index();
        let input: Vec<NormForm> = ["الحمد", "لله", "رب", "العالمين"]
            .iter()
            .map(|t| normalize(t))
            .collect();
        let cand = extend(Seed { input_pos: 0, qpos: 0 }, &input, &idx);
        assert_eq!(cand.input_start, 0);
        assert_eq!(cand.input_end, 3);
        assert_eq!(cand.qpos_start, 0);
        assert_eq!(cand.qpos_end, 3);
        assert_eq!(cand.length(), 4);
    }

    #[test]
    fn stops_at_first_disagreement() {
        let idx = index();
        let input: Vec<NormForm> = ["الحمد", "لله", "غير", "العالمين"]
            .iter()
            .map(|t| normalize(t))
            .collect();
        let cand = extend(Seed { input_pos: 0, qpos: 0 }, &input, &idx);
        assert_eq!(cand.input_start, 0);
        assert_eq!(cand.input_end, 1);
        assert_eq!(cand.length(), 2);
    }

    #[test]
    fn extension_maximality_boundaries_disagree_or_are_out_of_bounds() {
        let idx = index();
        let input: Vec<NormForm> = ["الحمد", "لله", "رب", "العالمين"]
            .iter()
            .map(|t| normalize(t))
            .collect();
        let cand = extend(Seed { input_pos: 0, qpos: 0 }, &input, &idx);
        assert_eq!(cand.input_start, 0);
        assert_eq!(cand.input_end, input.len() - 1);
    }
}
