//! Estonian numeral word tables.
//!
//! Every irregular form lives here as immutable static data; the formatter
//! only selects entries and never derives a word from digits.
//!
//! # Forms
//!
//! Each word carries three spellings:
//!
//! | Field          | Used for                                   | Example   |
//! |----------------|--------------------------------------------|-----------|
//! | `nominative`   | every word in cardinal mode                | `kaks`    |
//! | `genitive`     | non-final words of inflected modes, ages   | `kahe`    |
//! | `ordinal_stem` | final word: stem + `s`, stem + `ndal`      | `kahe`    |
//!
//! Units 1, 2 and 3 have suppletive ordinals (`esimene`, `teine`, `kolmas`)
//! that bypass the stem.

use crate::config::ScaleSystem;

/// Prefix word for negative cardinals.
pub const MINUS: &str = "miinus";
/// Suffix of the nominative ordinal (`neljas`).
pub const ORDINAL_SUFFIX: &str = "s";
/// Suffix of the adessive ordinal (`neljandal`).
pub const ADESSIVE_SUFFIX: &str = "ndal";
/// Suffix of the age adjective (`viieaastane`, `nelja-aastane`).
pub const AGE_SUFFIX: &str = "aastane";

/// Ordinal forms that do not follow the stem rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrregularOrdinal {
    pub ordinal: &'static str,
    pub adessive: &'static str,
}

/// Spellings of a single numeral word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Forms {
    pub nominative: &'static str,
    pub genitive: &'static str,
    pub ordinal_stem: &'static str,
    pub irregular: Option<IrregularOrdinal>,
}

const fn regular(nominative: &'static str, genitive: &'static str) -> Forms {
    Forms {
        nominative,
        genitive,
        ordinal_stem: genitive,
        irregular: None,
    }
}

const fn suppletive(
    nominative: &'static str,
    genitive: &'static str,
    ordinal: &'static str,
    adessive: &'static str,
) -> Forms {
    Forms {
        nominative,
        genitive,
        ordinal_stem: genitive,
        irregular: Some(IrregularOrdinal { ordinal, adessive }),
    }
}

pub static ZERO: Forms = regular("null", "nulli");

/// Units 1..=9, indexed by `digit - 1`.
pub static UNITS: [Forms; 9] = [
    suppletive("üks", "ühe", "esimene", "esimesel"),
    suppletive("kaks", "kahe", "teine", "teisel"),
    suppletive("kolm", "kolme", "kolmas", "kolmandal"),
    regular("neli", "nelja"),
    regular("viis", "viie"),
    regular("kuus", "kuue"),
    regular("seitse", "seitsme"),
    regular("kaheksa", "kaheksa"),
    regular("üheksa", "üheksa"),
];

/// 10..=19, indexed by `value - 10`.
pub static TEENS: [Forms; 10] = [
    regular("kümme", "kümne"),
    regular("üksteist", "üheteistkümne"),
    regular("kaksteist", "kaheteistkümne"),
    regular("kolmteist", "kolmeteistkümne"),
    regular("neliteist", "neljateistkümne"),
    regular("viisteist", "viieteistkümne"),
    regular("kuusteist", "kuueteistkümne"),
    regular("seitseteist", "seitsmeteistkümne"),
    regular("kaheksateist", "kaheksateistkümne"),
    regular("üheksateist", "üheksateistkümne"),
];

/// Round tens 20..=90, indexed by `tens_digit - 2`.
pub static TENS: [Forms; 8] = [
    regular("kakskümmend", "kahekümne"),
    regular("kolmkümmend", "kolmekümne"),
    regular("nelikümmend", "neljakümne"),
    regular("viiskümmend", "viiekümne"),
    regular("kuuskümmend", "kuuekümne"),
    regular("seitsekümmend", "seitsmekümne"),
    regular("kaheksakümmend", "kaheksakümne"),
    regular("üheksakümmend", "üheksakümne"),
];

/// Round hundreds 100..=900, indexed by `hundreds_digit - 1`.
pub static HUNDREDS: [Forms; 9] = [
    regular("sada", "saja"),
    regular("kakssada", "kahesaja"),
    regular("kolmsada", "kolmesaja"),
    regular("nelisada", "neljasaja"),
    regular("viissada", "viiesaja"),
    regular("kuussada", "kuuesaja"),
    regular("seitsesada", "seitsmesaja"),
    regular("kaheksasada", "kaheksasaja"),
    regular("üheksasada", "üheksasaja"),
];

/// `100` spelled with an explicit "one".
pub static ONE_HUNDRED_EXPLICIT: Forms = regular("ükssada", "ühesaja");

/// Word for one power-of-thousand group.
///
/// In the nominative the noun agrees with the group value: `singular` after
/// exactly one, the partitive `plural` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleWord {
    pub singular: &'static str,
    pub plural: &'static str,
    pub genitive: &'static str,
    pub ordinal_stem: &'static str,
}

const fn scale(
    singular: &'static str,
    plural: &'static str,
    genitive: &'static str,
    ordinal_stem: &'static str,
) -> ScaleWord {
    ScaleWord {
        singular,
        plural,
        genitive,
        ordinal_stem,
    }
}

/// Short scale: each name is a thousand times the previous one.
/// Indexed by `scale_index - 1` (entry 0 is 10³).
pub static SHORT_SCALE: [ScaleWord; 11] = [
    scale("tuhat", "tuhat", "tuhande", "tuhande"),
    scale("miljon", "miljonit", "miljoni", "miljone"),
    scale("miljard", "miljardit", "miljardi", "miljarde"),
    scale("triljon", "triljonit", "triljoni", "triljone"),
    scale("kvadriljon", "kvadriljonit", "kvadriljoni", "kvadriljone"),
    scale("kvintiljon", "kvintiljonit", "kvintiljoni", "kvintiljone"),
    scale("sekstiljon", "sekstiljonit", "sekstiljoni", "sekstiljone"),
    scale("septiljon", "septiljonit", "septiljoni", "septiljone"),
    scale("oktiljon", "oktiljonit", "oktiljoni", "oktiljone"),
    scale("noniljon", "noniljonit", "noniljoni", "noniljone"),
    scale("detsiljon", "detsiljonit", "detsiljoni", "detsiljone"),
];

/// Long scale: `-iljon` names step by 10⁶, `-iljard` names sit between.
/// Indexed by `scale_index - 1` (entry 0 is 10³).
pub static LONG_SCALE: [ScaleWord; 21] = [
    scale("tuhat", "tuhat", "tuhande", "tuhande"),
    scale("miljon", "miljonit", "miljoni", "miljone"),
    scale("miljard", "miljardit", "miljardi", "miljarde"),
    scale("biljon", "biljonit", "biljoni", "biljone"),
    scale("biljard", "biljardit", "biljardi", "biljarde"),
    scale("triljon", "triljonit", "triljoni", "triljone"),
    scale("triljard", "triljardit", "triljardi", "triljarde"),
    scale("kvadriljon", "kvadriljonit", "kvadriljoni", "kvadriljone"),
    scale("kvadriljard", "kvadriljardit", "kvadriljardi", "kvadriljarde"),
    scale("kvintiljon", "kvintiljonit", "kvintiljoni", "kvintiljone"),
    scale("kvintiljard", "kvintiljardit", "kvintiljardi", "kvintiljarde"),
    scale("sekstiljon", "sekstiljonit", "sekstiljoni", "sekstiljone"),
    scale("sekstiljard", "sekstiljardit", "sekstiljardi", "sekstiljarde"),
    scale("septiljon", "septiljonit", "septiljoni", "septiljone"),
    scale("septiljard", "septiljardit", "septiljardi", "septiljarde"),
    scale("oktiljon", "oktiljonit", "oktiljoni", "oktiljone"),
    scale("oktiljard", "oktiljardit", "oktiljardi", "oktiljarde"),
    scale("noniljon", "noniljonit", "noniljoni", "noniljone"),
    scale("noniljard", "noniljardit", "noniljardi", "noniljarde"),
    scale("detsiljon", "detsiljonit", "detsiljoni", "detsiljone"),
    scale("detsiljard", "detsiljardit", "detsiljardi", "detsiljarde"),
];

/// Scale table for a naming system.
#[must_use]
pub fn scale_table(system: ScaleSystem) -> &'static [ScaleWord] {
    match system {
        ScaleSystem::Short => &SHORT_SCALE,
        ScaleSystem::Long => &LONG_SCALE,
    }
}

#[must_use]
pub fn unit(digit: u16) -> &'static Forms {
    &UNITS[usize::from(digit) - 1]
}

#[must_use]
pub fn teen(value: u16) -> &'static Forms {
    &TEENS[usize::from(value) - 10]
}

#[must_use]
pub fn tens(digit: u16) -> &'static Forms {
    &TENS[usize::from(digit) - 2]
}

#[must_use]
pub fn hundreds(digit: u16, explicit_one: bool) -> &'static Forms {
    if digit == 1 && explicit_one {
        &ONE_HUNDRED_EXPLICIT
    } else {
        &HUNDREDS[usize::from(digit) - 1]
    }
}
