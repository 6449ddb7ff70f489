//! Arbitrary-precision signed integers stored as base-1000 groups.
//!
//! # Invariants
//!
//! 1. **No leading zero groups**: the most significant group is non-zero,
//!    except for the value zero, which is exactly one `0` group.
//! 2. **Groups are below 1000**: every group holds three decimal digits.
//! 3. **Zero is positive**: `"-0"` normalizes to [`Sign::Positive`].

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidInputError;

/// Radix of a digit group.
pub const GROUP_RADIX: u16 = 1000;

/// Sign of a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

/// Non-negative integer of unbounded size, most significant group first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Magnitude {
    groups: Vec<u16>,
}

impl Default for Magnitude {
    fn default() -> Self {
        Self::zero()
    }
}

impl Magnitude {
    #[must_use]
    pub fn zero() -> Self {
        Self { groups: vec![0] }
    }

    /// Build from a string of ASCII digits. Leading zeros are dropped.
    ///
    /// `digits` must be ASCII digits only; [`Number::parse`] validates first.
    fn from_ascii_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Self::zero();
        }

        let bytes = trimmed.as_bytes();
        let head = match bytes.len() % 3 {
            0 => 3,
            n => n,
        };
        let mut groups = Vec::with_capacity(bytes.len().div_ceil(3));
        groups.push(group_value(&bytes[..head]));
        groups.extend(bytes[head..].chunks(3).map(group_value));
        Self { groups }
    }

    /// Build from a machine integer.
    #[must_use]
    pub fn from_u128(mut value: u128) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let radix = u128::from(GROUP_RADIX);
        let mut groups = Vec::new();
        while value > 0 {
            // Always < 1000.
            groups.push((value % radix) as u16);
            value /= radix;
        }
        groups.reverse();
        Self { groups }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.groups == [0]
    }

    /// Groups, most significant first.
    #[must_use]
    pub fn groups(&self) -> &[u16] {
        &self.groups
    }

    /// Number of groups (1 for values 0..=999).
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Iterate `(scale_index, group)` pairs from most to least significant,
    /// where scale index 0 is the units group.
    pub fn indexed_groups(&self) -> impl Iterator<Item = (usize, u16)> + '_ {
        let top = self.groups.len() - 1;
        self.groups
            .iter()
            .enumerate()
            .map(move |(i, &group)| (top - i, group))
    }
}

fn group_value(digits: &[u8]) -> u16 {
    digits
        .iter()
        .fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0'))
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut groups = self.groups.iter();
        if let Some(first) = groups.next() {
            write!(f, "{first}")?;
        }
        for group in groups {
            write!(f, "{group:03}")?;
        }
        Ok(())
    }
}

/// A signed integer of unbounded size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Number {
    sign: Sign,
    magnitude: Magnitude,
}

impl Number {
    /// Combine a sign and magnitude. Zero always ends up positive.
    #[must_use]
    pub fn new(sign: Sign, magnitude: Magnitude) -> Self {
        let sign = if magnitude.is_zero() {
            Sign::Positive
        } else {
            sign
        };
        Self { sign, magnitude }
    }

    /// Parse a decimal string with an optional leading `-`.
    ///
    /// Leading zeros are accepted and ignored. Whitespace, `+`, separators
    /// and every other non-digit character are rejected.
    pub fn parse(input: &str) -> Result<Self, InvalidInputError> {
        if input.is_empty() {
            return Err(InvalidInputError::Empty);
        }
        let (sign, digits, offset) = match input.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest, 1),
            None => (Sign::Positive, input, 0),
        };
        if digits.is_empty() {
            return Err(InvalidInputError::MissingDigits);
        }
        if let Some((position, character)) =
            digits.char_indices().find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(InvalidInputError::InvalidCharacter {
                character,
                position: position + offset,
            });
        }
        Ok(Self::new(sign, Magnitude::from_ascii_digits(digits)))
    }

    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[must_use]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl FromStr for Number {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Number {
            fn from(value: $t) -> Self {
                Self::new(Sign::Positive, Magnitude::from_u128(value as u128))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Number {
            fn from(value: $t) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                Self::new(sign, Magnitude::from_u128(value.unsigned_abs() as u128))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_from_least_significant_end() {
        let n = Number::parse("1234567").unwrap();
        assert_eq!(n.magnitude().groups(), &[1, 234, 567]);
        let n = Number::parse("100200").unwrap();
        assert_eq!(n.magnitude().groups(), &[100, 200]);
    }

    #[test]
    fn leading_zeros_dropped() {
        let n = Number::parse("000042").unwrap();
        assert_eq!(n.magnitude().groups(), &[42]);
        let n = Number::parse("0001000").unwrap();
        assert_eq!(n.magnitude().groups(), &[1, 0]);
    }

    #[test]
    fn zero_is_single_group_and_positive() {
        for input in ["0", "000", "-0", "-000000"] {
            let n = Number::parse(input).unwrap();
            assert!(n.is_zero(), "{input}");
            assert_eq!(n.sign(), Sign::Positive, "{input}");
            assert_eq!(n.magnitude().groups(), &[0]);
        }
    }

    #[test]
    fn negative_sign() {
        let n = Number::parse("-5").unwrap();
        assert!(n.is_negative());
        assert_eq!(n.magnitude().groups(), &[5]);
    }

    #[test]
    fn rejects_empty_and_bare_sign() {
        assert_eq!(Number::parse(""), Err(InvalidInputError::Empty));
        assert_eq!(Number::parse("-"), Err(InvalidInputError::MissingDigits));
    }

    #[test]
    fn rejects_non_digits_with_position() {
        assert_eq!(
            Number::parse("12a3"),
            Err(InvalidInputError::InvalidCharacter {
                character: 'a',
                position: 2
            })
        );
        assert_eq!(
            Number::parse("-1-2"),
            Err(InvalidInputError::InvalidCharacter {
                character: '-',
                position: 2
            })
        );
        assert_eq!(
            Number::parse("+7"),
            Err(InvalidInputError::InvalidCharacter {
                character: '+',
                position: 0
            })
        );
        assert!(Number::parse(" 7").is_err());
        assert!(Number::parse("1 000").is_err());
        assert!(Number::parse("٣").is_err());
    }

    #[test]
    fn indexed_groups_count_down_to_units() {
        let n = Number::parse("1002003").unwrap();
        let pairs: Vec<_> = n.magnitude().indexed_groups().collect();
        assert_eq!(pairs, vec![(2, 1), (1, 2), (0, 3)]);
    }

    #[test]
    fn from_machine_integers() {
        assert_eq!(Number::from(0u8), Number::parse("0").unwrap());
        assert_eq!(Number::from(-999i32), Number::parse("-999").unwrap());
        assert_eq!(
            Number::from(i128::MIN),
            Number::parse(&i128::MIN.to_string()).unwrap()
        );
        assert_eq!(
            Number::from(u128::MAX),
            Number::parse(&u128::MAX.to_string()).unwrap()
        );
    }

    #[test]
    fn display_pads_inner_groups() {
        assert_eq!(Number::parse("-1002003").unwrap().to_string(), "-1002003");
        assert_eq!(Number::parse("00100").unwrap().to_string(), "100");
        assert_eq!(Number::parse("-0").unwrap().to_string(), "0");
    }

    #[test]
    fn thirty_digit_input_keeps_every_group() {
        let input = "123456789012345678901234567890";
        let n = Number::parse(input).unwrap();
        assert_eq!(n.magnitude().group_count(), 10);
        assert_eq!(n.to_string(), input);
    }
}
