//! The `tag()` entry point: ties the seed finder, extender, optional
//! ellipsis handler, and overlap resolver together into the single pure
//! function the rest of the system calls.

use crate::ellipsis::extend_with_ellipsis;
use crate::error::TagError;
use crate::extend::{extend, Candidate};
use crate::index::{Index, QMeta, QPos, Token};
use crate::normalize::{normalize, NormForm};
use crate::overlap::{resolve, OverlapWarning};
use crate::seed::find_seeds;
use crate::stopwords::{StopwordPolicy, StopwordSet};

#[derive(Debug, Clone)]
pub struct TagOptions {
    pub min_blocks: usize,
    pub with_ellipsis: bool,
    pub ellipsis_window: usize,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            min_blocks: 2,
            with_ellipsis: false,
            ellipsis_window: 2,
        }
    }
}

/// One emitted match: a run of input words aligned to a run of Qur'an words
/// of the same length (ellipsis gap words are stitched out of the reported
/// span).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    pub input_start: usize,
    pub input_end: usize,
    pub qpos_start: QPos,
    pub qpos_end: QPos,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagOutcome {
    pub matches: Vec<Match>,
    pub warnings: Vec<OverlapWarning>,
}

/// The built-once, immutable pairing of a [`Index`] and a [`StopwordSet`]
/// that every `tag()` call is threaded through. Construct once per process
/// (or per host, via `once_cell::sync::OnceCell`) — never implicitly on
/// import.
pub struct Engine {
    index: Index,
    stopwords: StopwordSet,
}

impl Engine {
    pub fn build(words: &[(Token, QMeta)], stopword_policy: StopwordPolicy) -> Result<Self, TagError> {
        let index = Index::build(words)?;
        let stopwords = StopwordSet::build(stopword_policy);
        Ok(Self { index, stopwords })
    }

    pub fn with_stopwords(index: Index, stopwords: StopwordSet) -> Self {
        Self { index, stopwords }
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Tags `tokens`, returning matches sorted by `input_start` and any
    /// equal-length overlap warnings. Pure and single-threaded: no
    /// suspension points, no shared mutable state.
    pub fn tag(&self, tokens: &[Token], opts: &TagOptions) -> Result<TagOutcome, TagError> {
        self.tag_cancelable(tokens, opts, || false)
    }

    /// As [`Engine::tag`], but `should_cancel` is consulted once per input
    /// token during normalization, letting a host abort at a token boundary.
    pub fn tag_cancelable(
        &self,
        tokens: &[Token],
        opts: &TagOptions,
        mut should_cancel: impl FnMut() -> bool,
    ) -> Result<TagOutcome, TagError> {
        if tokens.is_empty() {
            return Err(TagError::EmptyOrInvalidTokens);
        }

        let mut norm: Vec<NormForm> = Vec::with_capacity(tokens.len());
        for token in tokens {
            if should_cancel() {
                return Err(TagError::Cancelled);
            }
            norm.push(normalize(token));
        }

        let seeds = find_seeds(&norm, &self.index, &self.stopwords);
        let candidates: Vec<Candidate> = seeds
            .into_iter()
            .map(|seed| {
                if opts.with_ellipsis {
                    extend_with_ellipsis(seed, &norm, &self.index, opts.ellipsis_window)
                } else {
                    extend(seed, &norm, &self.index)
                }
            })
            .collect();

        let (accepted, warnings) = resolve(candidates, opts.min_blocks);
        for w in &warnings {
            log::warn!(
                "equal-length overlapping Qur'an matches dropped: qpos {} and qpos {}",
                w.a,
                w.b
            );
        }

        let mut matches: Vec<Match> = accepted
            .into_iter()
            .map(|c| Match {
                input_start: c.input_start,
                input_end: c.input_end,
                qpos_start: c.qpos_start,
                qpos_end: c.qpos_end,
            })
            .collect();
        matches.sort_by_key(|m| m.input_start);

        Ok(TagOutcome { matches, warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fatiha_words() -> Vec<(Token, QMeta)> {
        vec![
            ("بسم".into(), QMeta::new(1, 1, 1)),
            ("الله".into(), QMeta::new(1, 1, 2)),
            ("الرحمن".into(), QMeta::new(1, 1, 3)),
            ("الرحيم".into(), QMeta::new(1, 1, 4)),
            ("الحمد".into(), QMeta::new(1, 2, 1)),
            ("لله".into(), QMeta::new(1, 2, 2)),
            ("رب".into(), QMeta::new(1, 2, 3)),
            ("العالمين".into(), QMeta::new(1, 2, 4)),
        ]
    }

    fn ghafir_words() -> Vec<(Token, QMeta)> {
        vec![
            ("نرينك".into(), QMeta::new(40, 77, 1)),
            ("بعض".into(), QMeta::new(40, 77, 2)),
            ("الذي".into(), QMeta::new(40, 77, 3)),
            ("نعدهم".into(), QMeta::new(40, 77, 4)),
        ]
    }

    #[test]
    fn scenario_1_two_word_content_match() {
        let engine = Engine::build(&ghafir_words(), StopwordPolicy::Leeds).unwrap();
        let tokens: Vec<Token> = vec!["نرينك".into(), "بعض".into()];
        let outcome = engine.tag(&tokens, &TagOptions::default()).unwrap();
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].input_start, 0);
        assert_eq!(outcome.matches[0].input_end, 1);
    }

    #[test]
    fn scenario_2_stopword_anchor_rejected() {
        let engine = Engine::build(&fatiha_words(), StopwordPolicy::Leeds).unwrap();
        let tokens: Vec<Token> = vec!["الله".into(), "أكبر".into()];
        let outcome = engine.tag(&tokens, &TagOptions::default()).unwrap();
        assert!(outcome.matches.is_empty());
    }

    #[test]
    fn scenario_3_middle_three_of_ten_tokens() {
        let engine = Engine::build(&fatiha_words(), StopwordPolicy::Leeds).unwrap();
        let tokens: Vec<Token> = vec![
            "كتب".into(),
            "فلان".into(),
            "ذكر".into(),
            "الحمد".into(),
            "لله".into(),
            "رب".into(),
            "ختام".into(),
            "مقاله".into(),
            "هنا".into(),
            "تماما".into(),
        ];
        let outcome = engine.tag(&tokens, &TagOptions::default()).unwrap();
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].input_start, 3);
        assert_eq!(outcome.matches[0].input_end, 5);
        let length = outcome.matches[0].input_end - outcome.matches[0].input_start + 1;
        assert_eq!(length, 3);
    }

    #[test]
    fn scenario_4_longer_overlap_wins_silently() {
        let mut words = fatiha_words();
        words.extend(ghafir_words());
        let engine = Engine::build(&words, StopwordPolicy::Leeds).unwrap();
        // "الحمد لله رب العالمين" (len 4) fully contains a synthetic
        // shorter duplicate seeded elsewhere; exercised at the overlap-unit
        // level in overlap.rs. Here we confirm the longer one surfaces.
        let tokens: Vec<Token> = vec!["الحمد".into(), "لله".into(), "رب".into(), "العالمين".into()];
        let outcome = engine.tag(&tokens, &TagOptions::default()).unwrap();
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].input_end - outcome.matches[0].input_start + 1, 4);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn scenario_6_ellipsis_merges_verses_when_enabled() {
        let engine = Engine::build(&fatiha_words(), StopwordPolicy::Leeds).unwrap();
        let tokens: Vec<Token> = vec![
            "بسم".into(),
            "الله".into(),
            "الرحمن".into(),
            "الرحيم".into(),
            "وقال".into(),
            "الحمد".into(),
            "لله".into(),
            "رب".into(),
            "العالمين".into(),
        ];

        let without = engine.tag(&tokens, &TagOptions::default()).unwrap();
        assert_eq!(without.matches.len(), 2);

        let with_ellipsis = TagOptions {
            min_blocks: 2,
            with_ellipsis: true,
            ellipsis_window: 2,
        };
        let with = engine.tag(&tokens, &with_ellipsis).unwrap();
        assert_eq!(with.matches.len(), 1);
        assert_eq!(with.matches[0].input_start, 0);
        assert_eq!(with.matches[0].input_end, 8);
    }

    #[test]
    fn empty_tokens_is_an_error() {
        let engine = Engine::build(&fatiha_words(), StopwordPolicy::Leeds).unwrap();
        let err = engine.tag(&[], &TagOptions::default()).unwrap_err();
        assert!(matches!(err, TagError::EmptyOrInvalidTokens));
    }

    #[test]
    fn cancellation_probe_is_consulted_once_per_token() {
        let engine = Engine::build(&fatiha_words(), StopwordPolicy::Leeds).unwrap();
        let tokens: Vec<Token> = vec!["بسم".into(), "الله".into(), "الرحمن".into()];
        let mut calls = 0;
        let err = engine
            .tag_cancelable(&tokens, &TagOptions::default(), || {
                calls += 1;
                calls == 2
            })
            .unwrap_err();
        assert!(matches!(err, TagError::Cancelled));
        assert_eq!(calls, 2);
    }

    #[test]
    fn determinism_same_input_same_output() {
        let engine = Engine::build(&fatiha_words(), StopwordPolicy::Leeds).unwrap();
        let tokens: Vec<Token> = vec!["الحمد".into(), "لله".into(), "رب".into(), "العالمين".into()];
        let a = engine.tag(&tokens, &TagOptions::default()).unwrap();
        let b = engine.tag(&tokens, &TagOptions::default()).unwrap();
        assert_eq!(a.matches, b.matches);
        assert_eq!(a.warnings, b.warnings);
    }
}
