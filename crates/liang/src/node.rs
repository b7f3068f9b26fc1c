//! Horizontal list nodes.
//!
//! This is the part of TeX's box data structures (TeX.2021 part 10) that the
//!   hyphenation pass needs to see: the characters of a word, the ligatures
//!   built from them, and the material around them.

use texcontext::Scaled;

/// Node in a horizontal list.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Char(Char),
    Ligature(Ligature),
    Glue(Glue),
    Kern(Kern),
    Penalty(Penalty),
    Discretionary(Discretionary),
    HList(HList),
    Whatsit(Whatsit),
}

/// A character of a word, set in a font.
///
/// Described in TeX.2021.134.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Char {
    pub char: char,
    pub font: u32,
}

impl Char {
    pub fn new(char: char, font: u32) -> Self {
        Char { char, font }
    }
}

/// A ligature.
///
/// Described in TeX.2021.143.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ligature {
    pub char: char,
    pub font: u32,
    /// The characters the ligature replaced.
    /// A ligature is broken apart into these if a hyphen falls inside it.
    pub original_chars: Vec<char>,
}

/// A discretionary break.
///
/// Described in TeX.2021.145.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discretionary {
    /// Typeset at the end of the line if the break is taken; the hyphen goes here.
    pub pre_break: Vec<Node>,
    /// Typeset at the start of the next line if the break is taken.
    pub post_break: Vec<Node>,
    /// Number of following nodes dropped if the break is taken.
    pub replace_count: u32,
}

impl Discretionary {
    /// Returns the discretionary `\discretionary{<hyphen>}{}{}` that hyphenation inserts.
    pub fn hyphen(hyphen: Char) -> Self {
        Discretionary {
            pre_break: vec![Node::Char(hyphen)],
            ..Default::default()
        }
    }
}

/// A piece of glue.
///
/// Described in TeX.2021.149.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glue {
    pub glue: texcontext::Glue,
}

/// A kern.
///
/// Described in TeX.2021.155.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kern {
    pub width: Scaled,
}

/// A penalty.
///
/// Described in TeX.2021.157.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Penalty {
    pub value: i32,
}

impl Penalty {
    /// Penalties at or above this value forbid a break.
    pub const INFINITE: i32 = 10000;

    /// Penalties at or below this value force a break.
    pub const EJECT: i32 = -10000;
}

/// An hbox.
///
/// Only the fields relevant to hyphenation are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HList {
    pub width: Scaled,
    pub list: Vec<Node>,
}

/// An extension node, e.g. from `\special` or `\write`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whatsit {
    pub name: String,
}

impl From<Char> for Node {
    fn from(value: Char) -> Self {
        Node::Char(value)
    }
}

impl From<Ligature> for Node {
    fn from(value: Ligature) -> Self {
        Node::Ligature(value)
    }
}
