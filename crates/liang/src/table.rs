//! Hyphenation tables.
//!
//! A [LiangTable] combines a [PatternTree] with a list of [Exceptions]
//!   and hyphenates words using Liang's algorithm.
//!
//! To hyphenate a word of `n` letters, the word is bordered with a boundary
//!   letter on each side and the tree is queried at every position of the
//!   bordered word.
//! The codes found are superimposed into a single vector with one weight per gap;
//!   a break after the `m`-th letter is allowed if the weight of that gap is odd,
//!   there are at least `left_hyphen_min` letters before it
//!   and at least `right_hyphen_min` letters after it.

use crate::code::HyphenationCode;
use crate::config::HyphenationConfig;
use crate::error::{Error, Result};
use crate::exceptions::Exceptions;
use crate::letter::Word;
use crate::pattern::{self, Pattern, PatternToken};
use crate::tree::PatternTree;
use std::path::Path;

/// The places where a word may be broken.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakPoints {
    // breaks[m] is whether a break after m letters is allowed.
    breaks: Vec<bool>,
}

impl BreakPoints {
    /// Returns break points for a word of the given length with no allowed breaks.
    pub fn none(word_len: usize) -> BreakPoints {
        BreakPoints {
            breaks: vec![false; word_len + 1],
        }
    }

    /// Returns break points with breaks after the given numbers of letters.
    ///
    /// Positions at the start or end of the word, or past its end, are ignored.
    pub fn from_positions<I: IntoIterator<Item = usize>>(
        word_len: usize,
        positions: I,
    ) -> BreakPoints {
        let mut b = BreakPoints::none(word_len);
        for m in positions {
            b.set(m, true);
        }
        b
    }

    fn set(&mut self, m: usize, allowed: bool) {
        if m > 0 && m < self.word_len() {
            self.breaks[m] = allowed;
        }
    }

    /// Returns the length of the word these break points belong to.
    pub fn word_len(&self) -> usize {
        self.breaks.len().saturating_sub(1)
    }

    pub fn allows_break_after(&self, m: usize) -> bool {
        self.breaks.get(m).copied().unwrap_or(false)
    }

    /// Iterates over the numbers of letters after which a break is allowed.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.breaks
            .iter()
            .enumerate()
            .filter(|(_, allowed)| **allowed)
            .map(|(m, _)| m)
    }

    /// Returns the number of allowed breaks.
    pub fn count(&self) -> usize {
        self.breaks.iter().filter(|allowed| **allowed).count()
    }

    /// Returns the word with the hyphen character at each allowed break.
    ///
    /// ```
    /// # use liang::{BreakPoints, Word};
    /// let breaks = BreakPoints::from_positions(6, [2]);
    /// assert_eq!(breaks.apply(&Word::from("hyphen"), '-'), "hy-phen");
    /// ```
    pub fn apply(&self, word: &Word, hyphen: char) -> String {
        let mut s = String::with_capacity(word.len() + self.count());
        for (i, c) in word.chars().iter().enumerate() {
            if i > 0 && self.allows_break_after(i) {
                s.push(hyphen);
            }
            s.push(*c);
        }
        s
    }
}

/// A hyphenation table for one language.
///
/// ```
/// # use liang::{LiangTable, Word};
/// let mut table = LiangTable::new();
/// table.add_pattern_str("hy3ph").unwrap();
/// let breaks = table.hyphenate(&Word::from("hyphen")).unwrap();
/// assert_eq!(breaks.apply(&Word::from("hyphen"), '-'), "hy-phen");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiangTable {
    patterns: PatternTree,
    exceptions: Exceptions,
    frozen: bool,
    config: HyphenationConfig,
}

impl LiangTable {
    pub fn new() -> LiangTable {
        Default::default()
    }

    pub fn with_config(config: HyphenationConfig) -> LiangTable {
        LiangTable {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &HyphenationConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut HyphenationConfig {
        &mut self.config
    }

    pub fn patterns(&self) -> &PatternTree {
        &self.patterns
    }

    pub fn exceptions(&self) -> &Exceptions {
        &self.exceptions
    }

    /// Adds a pattern to the table.
    ///
    /// Fails with [Error::ImmutablePatternSet] if the table is frozen and with
    ///   [Error::DuplicatePattern] if the letters were registered with different weights.
    /// On failure the table is unchanged.
    pub fn add_pattern(&mut self, pattern: &Pattern) -> Result<()> {
        if self.frozen {
            return Err(Error::ImmutablePatternSet);
        }
        if pattern.is_empty() {
            return Ok(());
        }
        self.patterns.insert(pattern)?;
        log::trace!("added pattern {pattern}");
        Ok(())
    }

    /// Parses a pattern in Liang's notation and adds it to the table.
    pub fn add_pattern_str(&mut self, source: &str) -> Result<()> {
        if self.frozen {
            return Err(Error::ImmutablePatternSet);
        }
        self.add_pattern(&Pattern::parse(source)?)
    }

    /// Adds a pattern given as alternating digit and letter tokens.
    pub fn add_pattern_tokens(&mut self, tokens: &[PatternToken]) -> Result<()> {
        if self.frozen {
            return Err(Error::ImmutablePatternSet);
        }
        self.add_pattern(&Pattern::from_tokens(tokens)?)
    }

    /// Adds a hyphenation exception like `ta-ble`.
    ///
    /// Exceptions can be added to frozen tables.
    pub fn add_exception(&mut self, spec: &str) -> Result<()> {
        self.exceptions.add(spec)?;
        Ok(())
    }

    /// Makes the pattern set immutable.
    ///
    /// If the configuration asks for it, identical codes are shared afterwards.
    pub fn freeze(&mut self) {
        if self.frozen {
            return;
        }
        self.frozen = true;
        if self.config.compress_on_freeze {
            self.patterns.compress();
        }
        log::debug!(
            "froze hyphenation table with {} patterns in {} nodes",
            self.patterns.pattern_count(),
            self.patterns.node_count()
        );
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Hyphenates a word using the minima of the table's configuration.
    pub fn hyphenate(&self, word: &Word) -> Option<BreakPoints> {
        self.hyphenate_with(
            word,
            self.config.left_hyphen_min,
            self.config.right_hyphen_min,
        )
    }

    /// Hyphenates a word.
    ///
    /// Returns [None] if no break is possible.
    /// This is the case if the table is inactive, if the word has fewer than two letters,
    ///   or if no gap has an odd weight.
    /// Exceptions take precedence over patterns and are not subject to the minima;
    ///   otherwise a word shorter than `left_min + right_min` has no breaks.
    pub fn hyphenate_with(
        &self,
        word: &Word,
        left_min: usize,
        right_min: usize,
    ) -> Option<BreakPoints> {
        if !self.config.hyphen_active {
            return None;
        }
        let n = word.len();
        if n < 2 {
            return None;
        }
        let word = word.to_lowercase();
        if let Some(breaks) = self.exceptions.get(&word) {
            return if breaks.count() == 0 {
                None
            } else {
                Some(breaks.clone())
            };
        }
        if n < left_min + right_min {
            return None;
        }
        let letters = word.bordered();
        let mut weights = HyphenationCode::zeros(n + 3);
        for i in 0..letters.len() {
            if let Some(code) = self.patterns.get(&letters, i) {
                weights.superimpose(i, code);
            }
        }
        let mut breaks = BreakPoints::none(n);
        // The gap after m letters has index m+1 in the bordered word.
        for m in left_min.max(1)..=n - right_min.max(1) {
            breaks.set(m, weights.is_odd(m + 1));
        }
        if breaks.count() == 0 {
            None
        } else {
            Some(breaks)
        }
    }

    /// Logs the pattern tree.
    pub fn dump(&self) {
        log::debug!("pattern tree:\n{}", self.patterns);
    }

    /// Loads the patterns and exceptions of TeX source.
    ///
    /// Either the whole source is loaded or, on error, the table is left unchanged.
    pub fn load_tex(&mut self, tex: &str) -> Result<()> {
        let file = pattern::read_patterns(tex)?;
        if self.frozen && !file.patterns.is_empty() {
            return Err(Error::ImmutablePatternSet);
        }
        let mut staged = self.clone();
        for pattern in &file.patterns {
            staged.add_pattern(pattern)?;
        }
        for exception in &file.exceptions {
            staged.add_exception(exception)?;
        }
        *self = staged;
        Ok(())
    }

    /// Loads a pattern file from disk.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let tex = std::fs::read_to_string(path)?;
        self.load_tex(&tex)
    }
}
