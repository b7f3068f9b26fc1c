//! Binding categories, keys and values.
//!
//! Every binding in the context is addressed by a [Category] and a [Key].
//! Each category is conceptually its own table: the count register `x` and the
//! dimension register `x` are unrelated bindings.

use std::borrow::Cow;
use std::fmt;

use crate::types::*;

/// A kind of binding.
///
/// The list covers the tables TeX keeps in its equivalents table.
/// Extensions can add their own tables with [Category::Custom].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Meaning of control sequences and active characters.
    Code,
    /// Integer registers and integer parameters such as `\language`.
    Count,
    /// Dimension registers.
    Dimen,
    /// Glue registers.
    Skip,
    /// Math glue registers.
    Muskip,
    /// Token list registers.
    Toks,
    /// `\catcode` table.
    CatCode,
    /// `\lccode` table.
    LcCode,
    /// `\uccode` table.
    UcCode,
    /// `\sfcode` table.
    SfCode,
    /// `\mathcode` table.
    MathCode,
    /// `\delcode` table.
    DelCode,
    /// Font identifiers; the key `""` holds the current font.
    Font,
    /// The current typesetting context.
    Typesetting,
    /// Conditionals defined with `\newif`.
    If,
    /// Input streams opened with `\openin`.
    InFile,
    /// Output streams opened with `\openout`.
    OutFile,
    /// The interaction mode.
    Interaction,
    /// The magnification.
    Magnification,
    /// The namespace for control sequence names.
    Namespace,
    /// A table defined outside this crate.
    Custom(Cow<'static, str>),
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Category::*;
        let name = match self {
            Code => "code",
            Count => "count",
            Dimen => "dimen",
            Skip => "skip",
            Muskip => "muskip",
            Toks => "toks",
            CatCode => "catcode",
            LcCode => "lccode",
            UcCode => "uccode",
            SfCode => "sfcode",
            MathCode => "mathcode",
            DelCode => "delcode",
            Font => "font",
            Typesetting => "typesetting context",
            If => "if",
            InFile => "infile",
            OutFile => "outfile",
            Interaction => "interaction",
            Magnification => "mag",
            Namespace => "namespace",
            Custom(name) => name,
        };
        write!(f, "{name}")
    }
}

/// The key of a binding within its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// A named binding, like a control sequence or a named register.
    Name(String),
    /// A per-character binding, like a category code.
    Char(char),
    /// A numbered register.
    Index(usize),
}

impl Key {
    /// The key used by categories that hold a single value, like the interaction mode.
    pub fn unit() -> Key {
        Key::Name(String::new())
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Name(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Name(value)
    }
}

impl From<char> for Key {
    fn from(value: char) -> Self {
        Key::Char(value)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => write!(f, "{name}"),
            Key::Char(c) => write!(f, "`{c}"),
            Key::Index(i) => write!(f, "{i}"),
        }
    }
}

/// A bound value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Integer(i32),
    Dimen(Scaled),
    Glue(Glue),
    Tokens(Vec<Token>),
    CatCode(CatCode),
    Char(char),
    Bool(bool),
    Font(FontRef),
    Typesetting(TypesettingContext),
    Interaction(Interaction),
    Macro(Box<Macro>),
    /// A primitive command, identified by the name it was registered under.
    Primitive(String),
    /// A file handle, identified by its path.
    File(String),
    Str(String),
}

impl Value {
    /// A short description of the kind of value, used in error messages.
    pub fn kind(&self) -> &'static str {
        use Value::*;
        match self {
            Integer(_) => "integer",
            Dimen(_) => "dimension",
            Glue(_) => "glue",
            Tokens(_) => "token list",
            CatCode(_) => "category code",
            Char(_) => "character",
            Bool(_) => "boolean",
            Font(_) => "font",
            Typesetting(_) => "typesetting context",
            Interaction(_) => "interaction mode",
            Macro(_) => "macro",
            Primitive(_) => "primitive",
            File(_) => "file",
            Str(_) => "string",
        }
    }
}
