//! The spelled-out result of one conversion.

use std::fmt;

/// Ordered word tokens of a spelled number.
///
/// Words are joined with single spaces. A `Spelling` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spelling {
    words: Vec<String>,
}

impl Spelling {
    pub(crate) fn new(words: Vec<String>) -> Self {
        debug_assert!(!words.is_empty());
        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The word that carries the mode's ending.
    #[must_use]
    pub fn last_word(&self) -> &str {
        self.words.last().map_or("", String::as_str)
    }

    /// Number of words, at least one.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.words.join(" ")
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = self.words.iter();
        if let Some(first) = words.next() {
            f.write_str(first)?;
        }
        for word in words {
            f.write_str(" ")?;
            f.write_str(word)?;
        }
        Ok(())
    }
}

impl From<Spelling> for String {
    fn from(spelling: Spelling) -> Self {
        spelling.into_string()
    }
}
