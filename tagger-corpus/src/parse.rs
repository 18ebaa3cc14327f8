//! Parses the Tanzīl "simple" plain-text Qur'an format: one line per verse,
//! `surah|verse|text`, words space-separated, surahs and verses in
//! canonical recitation order.

use tagger_core::{QMeta, Token};

use crate::error::CorpusError;

/// Parses `raw` into a flat, position-ordered word list.
///
/// Strips a leading basmalah from the first verse of every sūrah except
/// al-Fātiḥa and at-Tawbah, since the Tanzīl edition repeats it as a
/// recitation-convention header rather than as that sūrah's own verse 1
/// everywhere but those two.
pub fn parse(raw: &str) -> Result<Vec<(Token, QMeta)>, CorpusError> {
    let mut words = Vec::new();
    let mut prev: Option<(u16, u16)> = None;

    for (idx, line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.splitn(3, '|');
        let (surah, verse, text) = match (parts.next(), parts.next(), parts.next()) {
            (Some(s), Some(v), Some(t)) => (s, v, t),
            _ => {
                return Err(CorpusError::Malformed {
                    line: line_no,
                    content: line.to_string(),
                })
            }
        };

        let surah: u16 = surah.parse().map_err(|_| CorpusError::Malformed {
            line: line_no,
            content: line.to_string(),
        })?;
        let verse: u16 = verse.parse().map_err(|_| CorpusError::Malformed {
            line: line_no,
            content: line.to_string(),
        })?;

        if let Some((ps, pv)) = prev {
            let monotonic = (surah, verse) > (ps, pv);
            if !monotonic {
                return Err(CorpusError::NonMonotonicPosition { line: line_no });
            }
        }
        prev = Some((surah, verse));

        let text = trim_basmalah(surah, verse, text);
        let mut word_in_verse: u16 = 0;
        for word in text.split_whitespace() {
            word_in_verse += 1;
            words.push((word.to_string(), QMeta::new(surah, verse, word_in_verse)));
        }
        if word_in_verse == 0 {
            return Err(CorpusError::EmptyVerse { line: line_no });
        }
    }

    Ok(words)
}

fn trim_basmalah(surah: u16, verse: u16, text: &str) -> &str {
    match (surah, verse) {
        (1, _) | (9, _) => text,
        (_, 1) => text.splitn(5, ' ').last().unwrap_or(text),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_basic_two_verse_corpus() {
        let raw = "1|1|بسم الله الرحمن الرحيم\n1|2|الحمد لله رب العالمين\n";
        let words = parse(raw).unwrap();
        assert_eq!(words.len(), 8);
        assert_eq!(words[0].0, "بسم");
        assert_eq!(words[0].1, QMeta::new(1, 1, 1));
        assert_eq!(words[7].1, QMeta::new(1, 2, 4));
    }

    #[test]
    fn strips_basmalah_from_other_surahs_first_verse() {
        let raw = "2|1|بسم الله الرحمن الرحيم الم\n";
        let words = parse(raw).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].0, "الم");
    }

    #[test]
    fn keeps_basmalah_for_fatiha_and_tawbah() {
        let raw = "1|1|بسم الله الرحمن الرحيم\n";
        let words = parse(raw).unwrap();
        assert_eq!(words.len(), 4);
        assert_eq!(words[0].0, "بسم");
    }

    #[test]
    fn rejects_malformed_line() {
        let raw = "not-a-valid-line\n";
        assert!(matches!(parse(raw), Err(CorpusError::Malformed { line: 1, .. })));
    }

    #[test]
    fn rejects_non_monotonic_position() {
        let raw = "1|2|الحمد لله\n1|1|بسم الله\n";
        assert!(matches!(
            parse(raw),
            Err(CorpusError::NonMonotonicPosition { line: 2 })
        ));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let raw = "1|1|بسم الله\n\n1|2|الحمد لله\n";
        let words = parse(raw).unwrap();
        assert_eq!(words.len(), 4);
    }
}
