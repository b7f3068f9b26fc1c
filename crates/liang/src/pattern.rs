//! Hyphenation patterns and pattern files.
//!
//! Patterns are written in Liang's notation:
//!   letters of a word fragment interleaved with digits giving the weight of each gap,
//!   with omitted digits meaning zero.
//! A `.` at the start or end of the pattern matches the boundary of the word.
//! For example `.ach4` forbids a break after "ach" at the start of a word,
//!   and `hy3ph` allows one between "hy" and "ph".
//!
//! Pattern files are TeX source with the patterns inside a `\patterns{...}` group
//!   and, optionally, hyphenation exceptions inside a `\hyphenation{...}` group.

use crate::code::HyphenationCode;
use crate::error::{Error, Result, SyntaxError};
use crate::letter::Letter;
use std::fmt;

/// A token of a pattern in the strict alternating form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken {
    Digit(u8),
    Letter(Letter),
}

/// A validated hyphenation pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    letters: Vec<Letter>,
    code: HyphenationCode,
}

impl Pattern {
    /// Parses a pattern in Liang's notation.
    ///
    /// ```
    /// # use liang::{Letter, Pattern};
    /// let pattern = Pattern::parse(".ach4").unwrap();
    /// assert_eq!(pattern.letters()[0], Letter::Boundary);
    /// assert_eq!(pattern.code().as_slice(), &[0, 0, 0, 0, 4]);
    /// ```
    pub fn parse(source: &str) -> Result<Pattern> {
        let mut tokens = Vec::with_capacity(source.len());
        for (position, c) in source.chars().enumerate() {
            let token = match c {
                '0'..='9' => PatternToken::Digit(c as u8 - b'0'),
                '.' => PatternToken::Letter(Letter::Boundary),
                _ if c.is_whitespace() || c.is_control() || c == '%' || c == '{' || c == '}' => {
                    return Err(syntax_error(
                        source,
                        position,
                        SyntaxError::InvalidCharacter(c),
                    ));
                }
                _ => PatternToken::Letter(Letter::Char(c)),
            };
            tokens.push((position, token));
        }
        build(source, tokens, false)
    }

    /// Builds a pattern from tokens that alternate between digits and letters.
    ///
    /// A sequence starting with a letter gets an implied leading zero,
    ///   and one ending with a letter gets an implied trailing zero.
    /// Every other gap must carry an explicit digit.
    pub fn from_tokens(tokens: &[PatternToken]) -> Result<Pattern> {
        let source = tokens
            .iter()
            .map(|token| match token {
                PatternToken::Digit(d) => d.to_string(),
                PatternToken::Letter(l) => l.to_string(),
            })
            .collect::<String>();
        build(&source, tokens.iter().copied().enumerate(), true)
    }

    pub(crate) fn from_parts(letters: Vec<Letter>, code: HyphenationCode) -> Pattern {
        Pattern { letters, code }
    }

    /// Returns the letters of the pattern.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Returns the weights of the pattern, one more than the number of letters.
    pub fn code(&self) -> &HyphenationCode {
        &self.code
    }

    /// Returns whether the pattern has no letters; inserting such a pattern does nothing.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            let w = self.code.get(i);
            if w != 0 {
                write!(f, "{w}")?;
            }
            write!(f, "{letter}")?;
        }
        let w = self.code.get(self.letters.len());
        if w != 0 {
            write!(f, "{w}")?;
        }
        Ok(())
    }
}

fn syntax_error(source: &str, position: usize, reason: SyntaxError) -> Error {
    Error::InvalidPatternSyntax {
        pattern: source.to_string(),
        position,
        reason,
    }
}

fn build<I>(source: &str, tokens: I, strict: bool) -> Result<Pattern>
where
    I: IntoIterator<Item = (usize, PatternToken)>,
{
    let mut letters = vec![];
    let mut digits = vec![];
    let mut pending: Option<u8> = None;
    // Position of a boundary marker that ended the pattern.
    let mut closed_at: Option<usize> = None;
    for (position, token) in tokens {
        match token {
            PatternToken::Digit(d) => {
                if d > 9 {
                    return Err(syntax_error(
                        source,
                        position,
                        SyntaxError::WeightOutOfRange(d),
                    ));
                }
                if pending.is_some() {
                    return Err(syntax_error(
                        source,
                        position,
                        SyntaxError::DigitWhereLetterExpected(d),
                    ));
                }
                pending = Some(d);
            }
            PatternToken::Letter(letter) => {
                if let Some(closed_at) = closed_at {
                    return Err(syntax_error(source, closed_at, SyntaxError::InnerBoundary));
                }
                let weight = match pending.take() {
                    Some(d) => d,
                    None if strict && !letters.is_empty() => {
                        let c = match letter {
                            Letter::Boundary => '.',
                            Letter::Char(c) => c,
                        };
                        return Err(syntax_error(
                            source,
                            position,
                            SyntaxError::LetterWhereDigitExpected(c),
                        ));
                    }
                    None => 0,
                };
                if letter == Letter::Boundary && !letters.is_empty() {
                    if letters.last() == Some(&Letter::Boundary) {
                        return Err(syntax_error(source, position, SyntaxError::InnerBoundary));
                    }
                    closed_at = Some(position);
                }
                digits.push(weight);
                letters.push(letter);
            }
        }
    }
    if letters.is_empty() {
        if pending.is_some() {
            return Err(syntax_error(source, 0, SyntaxError::NoLetters));
        }
        return Ok(Pattern::default());
    }
    digits.push(pending.unwrap_or(0));
    Ok(Pattern {
        letters,
        code: HyphenationCode::from_digits(digits),
    })
}

/// The contents of a pattern file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternFile {
    pub patterns: Vec<Pattern>,
    /// Exception words in the `hy-phen-ation` form.
    pub exceptions: Vec<String>,
}

#[derive(Clone, Copy)]
enum Group {
    Patterns,
    Hyphenation,
}

/// Reads the patterns and exceptions from TeX source.
///
/// ```
/// # use liang::pattern::read_patterns;
/// let file = read_patterns(r"
///     % English, abridged
///     \patterns{ .ach4 hy3ph }
///     \hyphenation{ ta-ble }
/// ").unwrap();
/// assert_eq!(file.patterns.len(), 2);
/// assert_eq!(file.exceptions, vec!["ta-ble".to_string()]);
/// ```
pub fn read_patterns(tex: &str) -> Result<PatternFile> {
    let mut file = PatternFile::default();
    let mut s = Scanner::new(tex);
    while let Some(c) = s.eat() {
        match c {
            '%' => {
                s.eat_while(|c| c != '\n');
            }
            '\\' => {
                let start = s.offset - 1;
                let name = s.eat_while(char::is_alphabetic);
                let group = match name {
                    "patterns" => Group::Patterns,
                    "hyphenation" => Group::Hyphenation,
                    _ => {
                        return Err(syntax_error(
                            tex,
                            start,
                            SyntaxError::UnknownControlSequence(name.to_string()),
                        ))
                    }
                };
                s.eat_while(char::is_whitespace);
                if s.eat() != Some('{') {
                    return Err(syntax_error(tex, start, SyntaxError::UnclosedGroup));
                }
                read_group(&mut s, group, &mut file, tex, start)?;
            }
            _ if c.is_whitespace() => {}
            _ => {
                return Err(syntax_error(
                    tex,
                    s.offset - 1,
                    SyntaxError::InvalidCharacter(c),
                ))
            }
        }
    }
    log::debug!(
        "read {} patterns and {} exceptions",
        file.patterns.len(),
        file.exceptions.len()
    );
    Ok(file)
}

fn read_group(
    s: &mut Scanner,
    group: Group,
    file: &mut PatternFile,
    tex: &str,
    start: usize,
) -> Result<()> {
    loop {
        let entry_start = s.offset;
        let entry = s.eat_while(|c| c != '}' && c != '%' && !c.is_whitespace());
        if !entry.is_empty() {
            match group {
                Group::Patterns => {
                    let pattern = Pattern::parse(entry).map_err(|err| match err {
                        Error::InvalidPatternSyntax {
                            pattern,
                            position,
                            reason,
                        } => Error::InvalidPatternSyntax {
                            pattern,
                            position: entry_start + position,
                            reason,
                        },
                        err => err,
                    })?;
                    file.patterns.push(pattern);
                }
                Group::Hyphenation => file.exceptions.push(entry.to_string()),
            }
        }
        match s.eat() {
            Some('}') => return Ok(()),
            Some('%') => {
                s.eat_while(|c| c != '\n');
            }
            Some(_) => {
                s.eat_while(char::is_whitespace);
            }
            None => return Err(syntax_error(tex, start, SyntaxError::UnclosedGroup)),
        }
    }
}

/// Scanner over TeX source that tracks the character offset.
struct Scanner<'a> {
    rest: &'a str,
    offset: usize,
}

impl<'a> Scanner<'a> {
    fn new(s: &'a str) -> Self {
        Scanner { rest: s, offset: 0 }
    }

    fn eat(&mut self) -> Option<char> {
        let mut chars = self.rest.chars();
        let c = chars.next();
        self.rest = chars.as_str();
        if c.is_some() {
            self.offset += 1;
        }
        c
    }

    fn eat_while(&mut self, f: fn(char) -> bool) -> &'a str {
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| !f(*c))
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        let head = &self.rest[..end];
        self.rest = &self.rest[end..];
        self.offset += head.chars().count();
        head
    }
}
