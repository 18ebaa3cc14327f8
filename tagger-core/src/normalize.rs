//! Archigraphemic normalization.
//!
//! Reduces an Arabic-script [`Token`](crate::index::Token) to a [`NormForm`]:
//! a string over a small, fixed "letterblock" alphabet that collapses
//! diacritics, tatweel, hamza orthography, and presentation-form variation.
//! Two tokens compare equal under matching iff their `NormForm`s are
//! byte-equal.

use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// An equivalence class over Arabic graphemes collapsing presentation-form,
/// diacritic, and hamza variation into a single rasm shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letterblock {
    Alif,
    Baa,
    Taa,
    Thaa,
    Jeem,
    Haa,
    Khaa,
    Dal,
    Dhal,
    Raa,
    Zay,
    Seen,
    Sheen,
    Sad,
    Dad,
    Ttaa,
    Zzaa,
    Ain,
    Ghain,
    Faa,
    Qaf,
    Kaf,
    Lam,
    Meem,
    Noon,
    Haa2,
    Waw,
    Yaa,
    TaaMarbuta,
}

impl Letterblock {
    /// The canonical base character this letterblock is stored as.
    fn canonical_char(self) -> char {
        use Letterblock::*;
        match self {
            Alif => '\u{0627}',
            Baa => '\u{0628}',
            Taa => '\u{062A}',
            Thaa => '\u{062B}',
            Jeem => '\u{062C}',
            Haa => '\u{062D}',
            Khaa => '\u{062E}',
            Dal => '\u{062F}',
            Dhal => '\u{0630}',
            Raa => '\u{0631}',
            Zay => '\u{0632}',
            Seen => '\u{0633}',
            Sheen => '\u{0634}',
            Sad => '\u{0635}',
            Dad => '\u{0636}',
            Ttaa => '\u{0637}',
            Zzaa => '\u{0638}',
            Ain => '\u{0639}',
            Ghain => '\u{063A}',
            Faa => '\u{0641}',
            Qaf => '\u{0642}',
            Kaf => '\u{0643}',
            Lam => '\u{0644}',
            Meem => '\u{0645}',
            Noon => '\u{0646}',
            Haa2 => '\u{0647}',
            Waw => '\u{0648}',
            Yaa => '\u{064A}',
            TaaMarbuta => '\u{0629}',
        }
    }

    /// Maps a decomposed Arabic base letter (hamza-bearing forms and
    /// alif-maqsura/yaa variants already folded) to its letterblock class.
    /// Returns `None` for isolated hamza (discarded) and for anything that
    /// is not part of the reduced alphabet (punctuation, digits, Latin).
    fn from_base_char(c: char) -> Option<Self> {
        use Letterblock::*;
        Some(match c {
            '\u{0627}' | '\u{0622}' | '\u{0623}' | '\u{0625}' | '\u{0671}' | '\u{0672}'
            | '\u{0673}' => Alif,
            '\u{0628}' => Baa,
            '\u{062A}' => Taa,
            '\u{062B}' => Thaa,
            '\u{062C}' => Jeem,
            '\u{062D}' => Haa,
            '\u{062E}' => Khaa,
            '\u{062F}' => Dal,
            '\u{0630}' => Dhal,
            '\u{0631}' => Raa,
            '\u{0632}' => Zay,
            '\u{0633}' => Seen,
            '\u{0634}' => Sheen,
            '\u{0635}' => Sad,
            '\u{0636}' => Dad,
            '\u{0637}' => Ttaa,
            '\u{0638}' => Zzaa,
            '\u{0639}' => Ain,
            '\u{063A}' => Ghain,
            '\u{0641}' => Faa,
            '\u{0642}' => Qaf,
            '\u{0643}' | '\u{06A9}' => Kaf,
            '\u{0644}' => Lam,
            '\u{0645}' => Meem,
            '\u{0646}' => Noon,
            '\u{0647}' => Haa2,
            '\u{0648}' | '\u{0624}' => Waw,
            '\u{064A}' | '\u{0649}' | '\u{0626}' | '\u{06CC}' | '\u{06D2}' => Yaa,
            '\u{0629}' => TaaMarbuta,
            _ => return None,
        })
    }
}

/// The archigraphemic normalization of a [`Token`](crate::index::Token):
/// a string over the reduced letterblock alphabet.
///
/// `normalize(normalize(x)) == normalize(x)` for all inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormForm(String);

impl NormForm {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_diacritic(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}'
        | '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06DC}'
        | '\u{06DF}'..='\u{06E8}'
        | '\u{06EA}'..='\u{06ED}'
        | '\u{08D3}'..='\u{08FF}')
}

fn is_tatweel(c: char) -> bool {
    c == '\u{0640}'
}

/// Strip diacritics and tatweel, fold hamza/alif-maqsura orthography, collapse
/// presentation forms, and drop punctuation/digits — in that order.
pub fn normalize(token: &str) -> NormForm {
    let decomposed: String = token.nfkc().collect();
    let mut out = String::with_capacity(decomposed.len());
    for c in decomposed.chars() {
        if is_diacritic(c) || is_tatweel(c) {
            continue;
        }
        if let Some(lb) = Letterblock::from_base_char(c) {
            out.push(lb.canonical_char());
        }
    }
    NormForm(out)
}
