//! Value types stored in the context.

use std::fmt;

/// Category code of a character.
///
/// The numeric values are the ones TeX uses for `\catcode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatCode {
    /// Example: `\`.
    Escape = 0,
    /// Example: `{`.
    BeginGroup = 1,
    /// Example: `}`.
    EndGroup = 2,
    /// Example: `$`.
    MathShift = 3,
    /// Example: `&`.
    AlignmentTab = 4,
    /// Example: `\n`.
    EndOfLine = 5,
    /// Example: `#`.
    Parameter = 6,
    /// Example: `^`.
    Superscript = 7,
    /// Example: `_`.
    Subscript = 8,
    /// Example: ASCII null (0).
    Ignored = 9,
    /// Example: ` `.
    Space = 10,
    /// Examples: `[a-zA-z]`.
    Letter = 11,
    /// Example: `@`.
    #[default]
    Other = 12,
    /// Example: `~`.
    Active = 13,
    /// Example: `%`.
    Comment = 14,
    /// Example: ASCII delete (127).
    Invalid = 15,
}

impl CatCode {
    /// Returns the category code with the provided TeX number, if it exists.
    pub fn from_int(i: i32) -> Option<CatCode> {
        use CatCode::*;
        Some(match i {
            0 => Escape,
            1 => BeginGroup,
            2 => EndGroup,
            3 => MathShift,
            4 => AlignmentTab,
            5 => EndOfLine,
            6 => Parameter,
            7 => Superscript,
            8 => Subscript,
            9 => Ignored,
            10 => Space,
            11 => Letter,
            12 => Other,
            13 => Active,
            14 => Comment,
            15 => Invalid,
            _ => return None,
        })
    }

    /// Returns the TeX number of this category code.
    pub fn int(self) -> i32 {
        self as i32
    }
}

/// Scaled numbers.
///
/// Fixed-point numbers with 16 bits for the fractional part; the inner value is the
/// number multiplied by 2^16.
/// Dimensions are scaled numbers of points.
#[derive(Default, PartialEq, Eq, Debug, Copy, Clone, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scaled(pub i32);

impl Scaled {
    pub const ZERO: Scaled = Scaled(0);
    pub const ONE: Scaled = Scaled(1 << 16);

    /// Creates the scaled number corresponding to the provided number of points.
    pub fn from_points(points: i16) -> Scaled {
        Scaled(Scaled::ONE.0 * points as i32)
    }
}

impl fmt::Display for Scaled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0 as f64 / Scaled::ONE.0 as f64)
    }
}

/// Order of infinity of a glue stretch or shrink.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GlueOrder {
    #[default]
    Normal,
    Fil,
    Fill,
    Filll,
}

/// Glue, the value of `\skip` and `\muskip` registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glue {
    pub width: Scaled,
    pub stretch: Scaled,
    pub stretch_order: GlueOrder,
    pub shrink: Scaled,
    pub shrink_order: GlueOrder,
}

/// A token, as stored in token lists, macro bodies and after-group queues.
///
/// The scanner that produces tokens lives outside this crate; the context only
/// stores and returns them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// A character with its category code.
    Char(char, CatCode),
    /// A control sequence, identified by its name without the escape character.
    ControlSequence(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Char(c, _) => write!(f, "{c}"),
            Token::ControlSequence(name) => write!(f, "\\{name}"),
        }
    }
}

/// A user-defined macro.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Macro {
    /// Number of parameters, between 0 and 9.
    pub parameters: u8,
    pub replacement: Vec<Token>,
}

/// Interaction mode of the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interaction {
    Batch,
    NonStop,
    Scroll,
    #[default]
    ErrorStop,
}

/// A reference to a loaded font: its name and the size it is loaded at.
///
/// Font metrics are not part of the context; they are looked up elsewhere by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontRef {
    pub name: String,
    pub size: Scaled,
}

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Color = Color {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 255,
    };
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// The attributes attached to every character node as it is typeset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypesettingContext {
    pub font: FontRef,
    pub color: Color,
    pub language: i32,
}
