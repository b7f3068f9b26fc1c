//! Hyphenation exceptions.
//!
//! Exceptions are words with explicitly given breaks, registered with TeX's
//!   `\hyphenation` primitive in the form `ta-ble`.
//! An exception replaces whatever the patterns would say about the word.

use crate::error::{Error, Result, SyntaxError};
use crate::letter::Word;
use crate::table::BreakPoints;
use std::collections::HashMap;

/// Words with explicitly given breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exceptions {
    words: HashMap<String, BreakPoints>,
}

impl Exceptions {
    /// Adds an exception and returns the word it applies to.
    ///
    /// Letters are stored in lower case.
    /// Registering a word again replaces its breaks.
    ///
    /// ```
    /// # use liang::Exceptions;
    /// let mut exceptions = Exceptions::default();
    /// let word = exceptions.add("Ta-ble").unwrap();
    /// assert_eq!(word, "table");
    /// ```
    pub fn add(&mut self, spec: &str) -> Result<String> {
        let mut word = Word::default();
        let mut positions = vec![];
        for (position, c) in spec.chars().enumerate() {
            if c == '-' {
                positions.push(word.len());
            } else if c.is_whitespace() || c.is_control() {
                return Err(Error::InvalidPatternSyntax {
                    pattern: spec.to_string(),
                    position,
                    reason: SyntaxError::InvalidCharacter(c),
                });
            } else {
                word.push(c);
            }
        }
        if word.is_empty() {
            return Err(Error::InvalidPatternSyntax {
                pattern: spec.to_string(),
                position: 0,
                reason: SyntaxError::NoLetters,
            });
        }
        let word = word.to_lowercase();
        let breaks = BreakPoints::from_positions(word.len(), positions);
        let key = word.to_string();
        log::trace!(
            "registered hyphenation exception {}",
            breaks.apply(&word, '-')
        );
        self.words.insert(key.clone(), breaks);
        Ok(key)
    }

    /// Returns the breaks of a word, which must already be in lower case.
    pub fn get(&self, word: &Word) -> Option<&BreakPoints> {
        self.words.get(&word.to_string())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the exceptions in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BreakPoints)> {
        self.words.iter().map(|(k, v)| (k.as_str(), v))
    }
}
