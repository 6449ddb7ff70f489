//! Number-to-words conversion.
//!
//! # Invariants
//!
//! 1. **Deterministic**: the output depends only on the number, the mode and
//!    the [`FormatterConfig`]; the formatter holds no mutable state.
//!
//! 2. **Zero groups are silent**: an all-zero group emits neither digits nor
//!    its scale word.
//!
//! 3. **Only the last word carries the mode**: every earlier word is the
//!    nominative (cardinal mode) or genitive (all other modes) cardinal form.
//!
//! 4. **No magnitude limit**: groups past the scale table are spelled as a
//!    multiple of the table's largest word, so the word count stays linear in
//!    the number of groups.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Empty / bare `-` | Nothing to spell | `InvalidInputError::Empty` / `MissingDigits` |
//! | Stray character | Anything but digits and one leading `-` | `InvalidInputError::InvalidCharacter` |
//! | Negative non-cardinal | No Estonian phrasing | `InvalidInputError::NegativeOrdinal` |

use crate::config::FormatterConfig;
use crate::error::InvalidInputError;
use crate::inflect::{self, Case};
use crate::lexicon::{self, Forms, MINUS, ZERO};
use crate::mode::Mode;
use crate::number::{Magnitude, Number};
use crate::spelling::Spelling;

/// Converts [`Number`]s to Estonian words.
///
/// # Example
///
/// ```
/// use estonian_numbers::{Mode, NumeralFormatter};
///
/// let formatter = NumeralFormatter::new();
/// assert_eq!(formatter.format("121", Mode::Cardinal).unwrap(), "sada kakskümmend üks");
/// assert_eq!(formatter.format("121", Mode::Ordinal).unwrap(), "saja kahekümne esimene");
/// assert_eq!(formatter.format("-5", Mode::Cardinal).unwrap(), "miinus viis");
/// assert!(formatter.format("12a3", Mode::Cardinal).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NumeralFormatter {
    config: FormatterConfig,
}

impl NumeralFormatter {
    /// Formatter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Parse a decimal string and spell it in `mode`.
    pub fn format(&self, input: &str, mode: Mode) -> Result<String, InvalidInputError> {
        let number = Number::parse(input).inspect_err(|err| {
            tracing::debug!(error = %err, len = input.len(), "rejected numeral input");
        })?;
        self.spell(&number, mode).map(Spelling::into_string)
    }

    /// Spell `number` in `mode`, keeping the individual words.
    pub fn spell(&self, number: &Number, mode: Mode) -> Result<Spelling, InvalidInputError> {
        if number.is_negative() && mode.is_inflected() {
            tracing::debug!(%mode, "negative number has no inflected form");
            return Err(InvalidInputError::NegativeOrdinal { mode });
        }

        let forms = self.word_forms(number.magnitude());
        let case = Case::for_mode(mode);
        let mut words = Vec::with_capacity(forms.len() + 1);
        if number.is_negative() {
            words.push(MINUS.to_string());
        }
        if let Some((last, init)) = forms.split_last() {
            words.extend(init.iter().map(|f| inflect::inflect(f, case).to_string()));
            words.push(inflect::finish(last, mode));
        }

        tracing::trace!(
            groups = number.magnitude().group_count(),
            words = words.len(),
            %mode,
            "spelled number"
        );
        Ok(Spelling::new(words))
    }

    /// Uninflected word forms of `magnitude`, most significant first.
    ///
    /// Groups are read in chunks of `table.len()`. Inside a chunk each group
    /// takes its own table word; the chunks above the first are closed by
    /// the largest table word, which agrees with everything spelled so far.
    /// `1001 * 10^33` is thus "üks tuhat üks detsiljonit", and every chunk
    /// adds at most one word past the table.
    fn word_forms(&self, magnitude: &Magnitude) -> Vec<Forms> {
        if magnitude.is_zero() {
            return vec![ZERO];
        }

        let table = lexicon::scale_table(self.config.scale);
        let chunk = table.len();
        let largest = &table[chunk - 1];
        if magnitude.group_count() > chunk {
            tracing::debug!(
                groups = magnitude.group_count(),
                table = chunk,
                "scale index beyond table"
            );
        }

        let mut forms = Vec::with_capacity(magnitude.group_count() * 4);
        // Whether the groups read so far spell a non-zero value.
        let mut nonzero = false;
        for (index, group) in magnitude.indexed_groups() {
            let (level, position) = (index / chunk, index % chunk);
            let one = !nonzero && group == 1;
            nonzero |= group != 0;

            if group != 0 {
                let bare_thousand =
                    position == 1 && group == 1 && !self.config.explicit_one_thousand;
                if !bare_thousand {
                    self.push_group(group, &mut forms);
                }
                if position > 0 {
                    forms.push(inflect::scale_forms(&table[position - 1], group == 1));
                }
            }
            if position == 0 && level > 0 && nonzero {
                forms.push(inflect::scale_forms(largest, one));
            }
        }
        forms
    }

    /// Words for a group value in 1..=999.
    fn push_group(&self, group: u16, forms: &mut Vec<Forms>) {
        let hundreds = group / 100;
        let rest = group % 100;
        if hundreds > 0 {
            forms.push(*lexicon::hundreds(
                hundreds,
                self.config.explicit_one_hundred,
            ));
        }
        match rest {
            0 => {}
            1..=9 => forms.push(*lexicon::unit(rest)),
            10..=19 => forms.push(*lexicon::teen(rest)),
            _ => {
                forms.push(*lexicon::tens(rest / 10));
                if rest % 10 > 0 {
                    forms.push(*lexicon::unit(rest % 10));
                }
            }
        }
    }
}
