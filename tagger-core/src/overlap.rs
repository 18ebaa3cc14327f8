//! Overlap resolver: given many overlapping candidates over the same input
//! region, selects a non-overlapping subset by longest-length preference.
//!
//! Candidates are processed tier by tier, longest length first. Within a
//! tier, any candidate that overlaps another candidate *of the same length*
//! and names a *different* Qur'an span is dropped and a warning is emitted
//! naming both Qur'an positions — this must be decided before either one is
//! accepted, which is why ties are resolved per-tier rather than by a single
//! greedy left-to-right pass. Surviving tier members that overlap an
//! already-accepted (strictly longer) candidate lose silently, with no
//! warning. A single quotation is often seeded more than once (one bigram
//! seed per overlapping pair of words inside it), so candidates are first
//! collapsed to one per distinct `(input_start, input_end, qpos_start,
//! qpos_end)` — otherwise those redundant seeds would "overlap" each other
//! and trip the equal-length conflict path against themselves.

use std::collections::HashSet;

use crate::extend::Candidate;
use crate::index::QPos;

/// Emitted when two candidates of equal length overlap and neither has been
/// accepted yet; the shipped policy drops both rather than picking one
/// arbitrarily.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlapWarning {
    pub a: QPos,
    pub b: QPos,
}

fn overlaps(a: &Candidate, b: &Candidate) -> bool {
    a.input_start <= b.input_end && b.input_start <= a.input_end
}

fn overlaps_any(c: &Candidate, accepted: &[Candidate]) -> bool {
    accepted.iter().any(|a| overlaps(c, a))
}

/// Two candidates are the *same quotation* when they cover the same input
/// span and align to the same Qur'an span — this happens when several
/// bigram seeds inside one run all extend to the identical candidate.
fn same_quotation(a: &Candidate, b: &Candidate) -> bool {
    a.input_start == b.input_start
        && a.input_end == b.input_end
        && a.qpos_start == b.qpos_start
        && a.qpos_end == b.qpos_end
}

/// Drops candidates that duplicate an earlier one's span, keeping input
/// order stable.
fn dedup_candidates(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for c in candidates {
        if !kept.iter().any(|k| same_quotation(k, &c)) {
            kept.push(c);
        }
    }
    kept
}

/// Applies the `min_blocks` threshold, then resolves overlaps. Returns the
/// accepted candidates (sorted by `input_start`) and any equal-length
/// overlap warnings.
pub fn resolve(candidates: Vec<Candidate>, min_blocks: usize) -> (Vec<Candidate>, Vec<OverlapWarning>) {
    let mut candidates = dedup_candidates(candidates);
    candidates.retain(|c| c.length() >= min_blocks);

    let mut lengths: Vec<usize> = candidates.iter().map(Candidate::length).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    lengths.dedup();

    let mut accepted: Vec<Candidate> = Vec::new();
    let mut warnings: Vec<OverlapWarning> = Vec::new();

    for length in lengths {
        let mut tier: Vec<usize> = (0..candidates.len())
            .filter(|&i| candidates[i].length() == length)
            .collect();
        tier.sort_by_key(|&i| candidates[i].input_start);

        let mut conflicted: HashSet<usize> = HashSet::new();
        for a in 0..tier.len() {
            for b in (a + 1)..tier.len() {
                let (ca, cb) = (&candidates[tier[a]], &candidates[tier[b]]);
                if overlaps(ca, cb) && !same_quotation(ca, cb) {
                    conflicted.insert(tier[a]);
                    conflicted.insert(tier[b]);
                    warnings.push(OverlapWarning {
                        a: ca.qpos_start,
                        b: cb.qpos_start,
                    });
                }
            }
        }

        for &i in &tier {
            if conflicted.contains(&i) {
                continue;
            }
            if overlaps_any(&candidates[i], &accepted) {
                continue;
            }
            accepted.push(candidates[i].clone());
        }
    }

    accepted.sort_by_key(|c| c.input_start);
    (accepted, warnings)
}
