//! Rendering modes, one per question a numeral can answer.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseModeError;

/// Which question the spelled numeral answers.
///
/// Only [`Mode::Cardinal`] keeps every word in the nominative. The other
/// modes put every word in the genitive and give the last word its own form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// *Kui palju?* ("how many?"): `kakskümmend üks`.
    #[default]
    Cardinal,
    /// *Mitmes?* ("which-th?"): `kahekümne esimene`.
    Ordinal,
    /// *Mitmendal?* ("on which-th?"): `kahekümne esimesel`.
    OrdinalAdessive,
    /// *Kui vana?* ("how old?"): `kahekümne üheaastane`.
    Age,
}

impl Mode {
    /// All modes, in declaration order.
    pub const ALL: [Mode; 4] = [
        Mode::Cardinal,
        Mode::Ordinal,
        Mode::OrdinalAdessive,
        Mode::Age,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cardinal => "cardinal",
            Self::Ordinal => "ordinal",
            Self::OrdinalAdessive => "ordinal-adessive",
            Self::Age => "age",
        }
    }

    /// Whether this mode inflects non-final words to the genitive.
    #[must_use]
    pub const fn is_inflected(self) -> bool {
        !matches!(self, Self::Cardinal)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cardinal" | "kuipalju" | "kui-palju" => Some(Self::Cardinal),
            "ordinal" | "mitmes" => Some(Self::Ordinal),
            "ordinal-adessive" | "ordinal_adessive" | "ordinaladessive" | "mitmendal" => {
                Some(Self::OrdinalAdessive)
            }
            "age" | "kuivana" | "kui-vana" => Some(Self::Age),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseModeError(s.to_string()))
    }
}
