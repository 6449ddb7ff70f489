//! Error types for numeral input and mode parsing.

use crate::mode::Mode;

/// Errors raised when an input cannot be spelled.
///
/// Every failure is a deterministic validation failure: no partial output is
/// ever produced alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// The input string was empty.
    Empty,
    /// The input consisted of a sign with no digits after it.
    MissingDigits,
    /// A character outside `[0-9]` (other than one leading `-`) was found.
    InvalidCharacter { character: char, position: usize },
    /// A negative number was requested in a mode with no negative phrasing.
    NegativeOrdinal { mode: Mode },
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("empty number"),
            Self::MissingDigits => f.write_str("sign without digits"),
            Self::InvalidCharacter {
                character,
                position,
            } => write!(f, "invalid character {character:?} at byte {position}"),
            Self::NegativeOrdinal { mode } => {
                write!(f, "negative numbers have no {mode} form")
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// Error returned when a [`Mode`] name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(pub String);

impl std::fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown numeral mode: {}", self.0)
    }
}

impl std::error::Error for ParseModeError {}
