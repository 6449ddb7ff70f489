//! Question selector as seen by JavaScript callers.

use estonian_numbers::Mode;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// The question a spelled number answers, named as in Estonian.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// "Kui palju?": cardinal.
    KuiPalju,
    /// "Kui vana?": age adjective.
    KuiVana,
    /// "Mitmes?": ordinal.
    Mitmes,
    /// "Mitmendal?": adessive ordinal.
    Mitmendal,
}

impl Question {
    #[must_use]
    pub const fn mode(self) -> Mode {
        match self {
            Self::KuiPalju => Mode::Cardinal,
            Self::KuiVana => Mode::Age,
            Self::Mitmes => Mode::Ordinal,
            Self::Mitmendal => Mode::OrdinalAdessive,
        }
    }
}

impl From<Question> for Mode {
    fn from(question: Question) -> Self {
        question.mode()
    }
}
