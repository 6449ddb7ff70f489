#![forbid(unsafe_code)]

//! Platform-independent core of the export.
//!
//! Shared by the wasm-bindgen wrapper and the native tests. No JS/WASM types
//! here.

use estonian_numbers::InvalidInputError;

use crate::question::Question;

/// Spell a decimal string as the answer to `question`.
pub fn to_letters(number: &str, question: Question) -> Result<String, InvalidInputError> {
    let mode = question.mode();
    tracing::trace!(len = number.len(), %mode, "to_letters");
    estonian_numbers::to_letters(number, mode)
}
