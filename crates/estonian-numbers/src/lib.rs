#![forbid(unsafe_code)]

//! Spell integers of any size as Estonian words.
//!
//! Provides cardinal numerals (`kakskümmend üks`), ordinals (`kahekümne
//! esimene`), adessive ordinals (`kahekümne esimesel`) and age adjectives
//! (`kahekümne üheaastane`) for signed integers given as decimal strings or
//! machine integers. All grammar lives in static lookup tables; conversion is
//! a pure, synchronous function.
//!
//! ```
//! use estonian_numbers::{Mode, to_letters};
//!
//! assert_eq!(to_letters("1001000", Mode::Cardinal).unwrap(), "üks miljon üks tuhat");
//! assert_eq!(to_letters("1212", Mode::OrdinalAdessive).unwrap(),
//!            "ühe tuhande kahesaja kaheteistkümnendal");
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod inflect;
pub mod lexicon;
pub mod mode;
pub mod number;
pub mod spelling;

use std::sync::OnceLock;

pub use config::{ConfigError, ConfigParse, FormatterConfig, ScaleSystem};
pub use error::{InvalidInputError, ParseModeError};
pub use formatter::NumeralFormatter;
pub use mode::Mode;
pub use number::{Magnitude, Number, Sign};
pub use spelling::Spelling;

/// Process-wide formatter configured from the environment on first use.
pub fn env_formatter() -> &'static NumeralFormatter {
    static FORMATTER: OnceLock<NumeralFormatter> = OnceLock::new();
    FORMATTER.get_or_init(|| {
        let parsed = FormatterConfig::from_env_with_diagnostics();
        for error in &parsed.errors {
            tracing::warn!(%error, "ignoring invalid formatter setting");
        }
        NumeralFormatter::with_config(parsed.config)
    })
}

/// Spell a decimal string using the environment-configured formatter.
pub fn to_letters(number: &str, mode: Mode) -> Result<String, InvalidInputError> {
    env_formatter().format(number, mode)
}

/// Spell a machine integer using the environment-configured formatter.
pub fn int_to_letters(number: impl Into<Number>, mode: Mode) -> Result<String, InvalidInputError> {
    env_formatter()
        .spell(&number.into(), mode)
        .map(Spelling::into_string)
}
