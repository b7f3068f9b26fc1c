//! Letters and words.

use std::fmt;

/// A letter of a pattern or of a word being hyphenated.
///
/// The word boundary is a letter of its own, distinct from every character.
/// It is written `.` in pattern notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    Boundary,
    Char(char),
}

impl Letter {
    /// The integer used for the boundary in serialized tables.
    ///
    /// It is one past the largest Unicode scalar value, so no character maps to it.
    pub const BOUNDARY_CODE: u32 = 0x11_0000;

    /// Returns the integer code of this letter.
    pub fn code(self) -> u32 {
        match self {
            Letter::Boundary => Letter::BOUNDARY_CODE,
            Letter::Char(c) => c as u32,
        }
    }

    /// Returns the letter with the provided integer code, if any.
    pub fn from_code(code: u32) -> Option<Letter> {
        if code == Letter::BOUNDARY_CODE {
            Some(Letter::Boundary)
        } else {
            char::from_u32(code).map(Letter::Char)
        }
    }
}

impl From<char> for Letter {
    fn from(c: char) -> Self {
        Letter::Char(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Letter::Boundary => write!(f, "."),
            Letter::Char(c) => write!(f, "{c}"),
        }
    }
}

// Letters are keys of the pattern tree's child maps, and formats like JSON only
// support string and integer keys, so letters are serialized as their integer code.
#[cfg(feature = "serde")]
impl serde::Serialize for Letter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Letter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u32::deserialize(deserializer)?;
        let message = format!("invalid letter code {code:#x}");
        Letter::from_code(code).ok_or_else(|| serde::de::Error::custom(message))
    }
}

/// A word being hyphenated.
///
/// ```
/// # use liang::{Letter, Word};
/// let word = Word::from("ab");
/// assert_eq!(
///     word.bordered(),
///     vec![Letter::Boundary, Letter::Char('a'), Letter::Char('b'), Letter::Boundary],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Word(Vec<char>);

impl Word {
    pub fn new(chars: Vec<char>) -> Self {
        Word(chars)
    }

    /// Returns the number of letters in the word.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<char> {
        self.0.get(i).copied()
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn push(&mut self, c: char) {
        self.0.push(c)
    }

    /// Returns the letters of the word with a boundary letter at each end.
    pub fn bordered(&self) -> Vec<Letter> {
        let mut letters = Vec::with_capacity(self.0.len() + 2);
        letters.push(Letter::Boundary);
        letters.extend(self.0.iter().map(|c| Letter::Char(*c)));
        letters.push(Letter::Boundary);
        letters
    }

    /// Returns the word with every letter replaced by its lower case form.
    ///
    /// Letters whose lower case form is more than one character are kept unchanged.
    pub fn to_lowercase(&self) -> Word {
        self.0
            .iter()
            .map(|c| {
                let mut lower = c.to_lowercase();
                match (lower.next(), lower.next()) {
                    (Some(l), None) => l,
                    _ => *c,
                }
            })
            .collect()
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl FromIterator<char> for Word {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Word(iter.into_iter().collect())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
