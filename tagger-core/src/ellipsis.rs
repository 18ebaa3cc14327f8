//! Ellipsis handler (optional, off by default): allows a candidate to skip a
//! bounded window of non-matching input words, provided matching resumes
//! within the window. At most one ellipsis gap is permitted per candidate,
//! whichever end (forward or backward) exhausts the gap budget first.
//!
//! Enabling this lowers precision by a few tenths of a percent on the
//! shipped evaluation corpus without a measurable recall gain — it remains
//! a tunable, not a default.

use crate::extend::Candidate;
use crate::index::Index;
use crate::normalize::NormForm;
use crate::seed::Seed;

pub fn extend_with_ellipsis(seed: Seed, input: &[NormForm], index: &Index, window: usize) -> Candidate {
    let i = seed.input_pos;
    let j = seed.qpos;
    let mut gaps: Vec<(usize, usize)> = Vec::new();

    let (input_end, qpos_end) = extend_forward(i + 1, j + 1, input, index, window, &mut gaps);
    let (input_start, qpos_start) = extend_backward(i, j, input, index, window, &mut gaps);

    Candidate {
        input_start,
        input_end,
        qpos_start,
        qpos_end,
        ellipsis_gaps: gaps,
    }
}

fn extend_forward(
    mut input_end: usize,
    mut qpos_end: usize,
    input: &[NormForm],
    index: &Index,
    window: usize,
    gaps: &mut Vec<(usize, usize)>,
) -> (usize, usize) {
    let mut k = input_end + 1;
    let mut m = qpos_end + 1;
    loop {
        if k >= input.len() || m >= index.len() {
            break;
        }
        let q_word = index.word(m).expect("m < index.len()");
        if input[k] == *q_word {
            input_end = k;
            qpos_end = m;
            k += 1;
            m += 1;
            continue;
        }
        if gaps.is_empty() {
            let hi = (k + window).min(input.len() - 1);
            if let Some(kp) = (k + 1..=hi).find(|&kp| input[kp] == *q_word) {
                gaps.push((k, kp));
                input_end = kp;
                qpos_end = m;
                k = kp + 1;
                m += 1;
                continue;
            }
        }
        break;
    }
    (input_end, qpos_end)
}

fn extend_backward(
    mut input_start: usize,
    mut qpos_start: usize,
    input: &[NormForm],
    index: &Index,
    window: usize,
    gaps: &mut Vec<(usize, usize)>,
) -> (usize, usize) {
    loop {
        if input_start == 0 || qpos_start == 0 {
            break;
        }
        let k = input_start - 1;
        let m = qpos_start - 1;
        let q_word = index.word(m).expect("m < index.len()");
        if input[k] == *q_word {
            input_start = k;
            qpos_start = m;
            continue;
        }
        if gaps.is_empty() {
            let lo = k.saturating_sub(window.saturating_sub(1));
            if let Some(kp) = (lo..k).rev().find(|&kp| input[kp] == *q_word) {
                gaps.push((kp + 1, k + 1));
                input_start = kp;
                qpos_start = m;
                continue;
            }
        }
        break;
    }
    (input_start, qpos_start)
}
