//! Inflection of individual numeral words.
//!
//! Estonian compound numerals inflect every component: in `kahekümne
//! esimene` ("twenty-first") the leading words are genitive and only the last
//! one carries the ordinal ending. The formatter therefore asks for one of two
//! shapes per word: [`inflect`] for every non-final word and [`finish`] for
//! the final one.

use crate::lexicon::{ADESSIVE_SUFFIX, AGE_SUFFIX, Forms, ORDINAL_SUFFIX, ScaleWord};
use crate::mode::Mode;

/// Case of a non-final word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Nominative,
    Genitive,
}

impl Case {
    /// Case that non-final words take in `mode`.
    #[must_use]
    pub const fn for_mode(mode: Mode) -> Self {
        if mode.is_inflected() {
            Self::Genitive
        } else {
            Self::Nominative
        }
    }
}

/// Resolve a scale noun into word forms, applying number agreement.
#[must_use]
pub fn scale_forms(word: &ScaleWord, singular: bool) -> Forms {
    Forms {
        nominative: if singular { word.singular } else { word.plural },
        genitive: word.genitive,
        ordinal_stem: word.ordinal_stem,
        irregular: None,
    }
}

/// Spelling of a non-final word.
#[must_use]
pub fn inflect(forms: &Forms, case: Case) -> &'static str {
    match case {
        Case::Nominative => forms.nominative,
        Case::Genitive => forms.genitive,
    }
}

/// Spelling of the final word in `mode`.
#[must_use]
pub fn finish(forms: &Forms, mode: Mode) -> String {
    match mode {
        Mode::Cardinal => forms.nominative.to_string(),
        Mode::Ordinal => match forms.irregular {
            Some(irregular) => irregular.ordinal.to_string(),
            None => compound(forms.ordinal_stem, ORDINAL_SUFFIX),
        },
        Mode::OrdinalAdessive => match forms.irregular {
            Some(irregular) => irregular.adessive.to_string(),
            None => compound(forms.ordinal_stem, ADESSIVE_SUFFIX),
        },
        Mode::Age => compound(forms.genitive, AGE_SUFFIX),
    }
}

/// Join a stem and suffix into one word.
///
/// A hyphen separates them when the join would produce three identical
/// letters in a row (`saja` + `aastane` = `saja-aastane`).
#[must_use]
pub fn compound(stem: &str, suffix: &str) -> String {
    let mut out = String::with_capacity(stem.len() + suffix.len() + 1);
    out.push_str(stem);
    let mut head = suffix.chars();
    if let (Some(last), Some(a), Some(b)) = (stem.chars().last(), head.next(), head.next()) {
        if last == a && a == b {
            out.push('-');
        }
    }
    out.push_str(suffix);
    out
}
