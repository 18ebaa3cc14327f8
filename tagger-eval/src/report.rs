//! Gold-annotation comparison: aligns by `(input_start, input_end)` and
//! reports precision/recall/F1 against a set of expected matches. A pure
//! comparison tool — it never re-runs the matcher itself.

use serde::{Deserialize, Serialize};

/// One annotated match: an input span resolved to the Qur'anic verse it was
/// taken from. Used both for hand-written gold files and for the tagger's
/// own resolved output — `tagger-cli` converts its `Match`es (which carry a
/// `QPos`, not a verse number) to this shape via the `Index` before handing
/// them to [`evaluate`], so this crate never needs to know about indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldSpan {
    pub input_start: usize,
    pub input_end: usize,
    pub surah: u16,
    pub verse: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Compares `predicted` to `gold`, aligning by `(input_start, input_end)`.
pub fn evaluate(gold: &[GoldSpan], predicted: &[GoldSpan]) -> Report {
    let mut true_positives = 0usize;
    let mut matched_gold: Vec<bool> = vec![false; gold.len()];

    for p in predicted {
        let hit = gold
            .iter()
            .enumerate()
            .position(|(idx, g)| !matched_gold[idx] && g == p);

        if let Some(idx) = hit {
            matched_gold[idx] = true;
            true_positives += 1;
        }
    }

    let false_positives = predicted.len() - true_positives;
    let false_negatives = matched_gold.iter().filter(|&&hit| !hit).count();

    let precision = if true_positives + false_positives == 0 {
        0.0
    } else {
        true_positives as f64 / (true_positives + false_positives) as f64
    };
    let recall = if true_positives + false_negatives == 0 {
        0.0
    } else {
        true_positives as f64 / (true_positives + false_negatives) as f64
    };
    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    Report {
        true_positives,
        false_positives,
        false_negatives,
        precision,
        recall,
        f1,
    }
}
