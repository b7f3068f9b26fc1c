//! Group types and deferred after-group actions.

use std::fmt;

use crate::context::Context;
use crate::types::Token;

/// The kind of construct that opened a group.
///
/// The numeric values are those reported by `\currentgrouptype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupType {
    /// The outermost level, which is never opened or closed.
    BottomLevel = 0,
    /// A group delimited by braces.
    #[default]
    Simple = 1,
    HBox = 2,
    AdjustedHBox = 3,
    VBox = 4,
    VTop = 5,
    Align = 6,
    NoAlign = 7,
    Output = 8,
    Math = 9,
    Disc = 10,
    Insert = 11,
    VCenter = 12,
    MathChoice = 13,
    /// A group delimited by `\begingroup` and `\endgroup`.
    SemiSimple = 14,
    MathShift = 15,
    MathLeft = 16,
}

impl GroupType {
    /// The value `\currentgrouptype` reports for this group type.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// The description `\showgroups` uses for this group type.
    pub fn description(self) -> &'static str {
        use GroupType::*;
        match self {
            BottomLevel => "bottom level",
            Simple => "simple",
            HBox => "hbox",
            AdjustedHBox => "adjusted hbox",
            VBox => "vbox",
            VTop => "vtop",
            Align => "align",
            NoAlign => "no align",
            Output => "output",
            Math => "math",
            Disc => "disc",
            Insert => "insert",
            VCenter => "vcenter",
            MathChoice => "math choice",
            SemiSimple => "semi simple",
            MathShift => "math shift",
            MathLeft => "math left",
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// A callback run when a group closes.
pub type Callback = Box<dyn FnOnce(&mut Context)>;

/// An action deferred until the current group closes.
pub enum AfterGroup {
    /// A token to reinsert into the input stream, as with `\aftergroup`.
    Token(Token),
    /// A callback run against the context.
    Callback(Callback),
}

impl fmt::Debug for AfterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AfterGroup::Token(token) => f.debug_tuple("Token").field(token).finish(),
            AfterGroup::Callback(_) => f.debug_tuple("Callback").finish_non_exhaustive(),
        }
    }
}

impl From<Token> for AfterGroup {
    fn from(token: Token) -> Self {
        AfterGroup::Token(token)
    }
}

/// Data attached to every open frame.
#[derive(Debug, Default)]
pub(crate) struct Group {
    pub(crate) group_type: GroupType,
    pub(crate) after_group: Vec<AfterGroup>,
}

impl Group {
    pub(crate) fn new(group_type: GroupType) -> Self {
        Group {
            group_type,
            after_group: vec![],
        }
    }
}
