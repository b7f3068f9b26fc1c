//! Error handling

/// Result type with [Error] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned when building or querying hyphenation tables.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pattern was registered twice with different weights.
    #[error("the pattern {pattern} conflicts with the previously registered {existing}")]
    DuplicatePattern { pattern: String, existing: String },

    #[error("invalid pattern `{pattern}` at position {position}: {reason}")]
    InvalidPatternSyntax {
        pattern: String,
        position: usize,
        reason: SyntaxError,
    },

    /// A pattern was added after the table was frozen.
    #[error("the pattern set is frozen and can't be modified")]
    ImmutablePatternSet,

    #[error("no hyphenation table for language {0}")]
    UnknownLanguage(String),

    /// A hyphenation parameter in the context has the wrong kind of value.
    #[error(transparent)]
    Context(#[from] texcontext::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The reason a pattern or pattern file was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("expected a letter after the digit {0}")]
    DigitWhereLetterExpected(u8),

    #[error("expected a digit before the letter `{0}`")]
    LetterWhereDigitExpected(char),

    #[error("the boundary marker can only appear at the start or end of a pattern")]
    InnerBoundary,

    #[error("the weight {0} is out of range (0-9)")]
    WeightOutOfRange(u8),

    #[error("the pattern contains no letters")]
    NoLetters,

    #[error("the character {0:?} is not allowed in a pattern")]
    InvalidCharacter(char),

    #[error("the group opened here is never closed")]
    UnclosedGroup,

    #[error("unknown control sequence \\{0}")]
    UnknownControlSequence(String),
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        use Error::*;
        match (self, other) {
            (
                DuplicatePattern {
                    pattern: p1,
                    existing: e1,
                },
                DuplicatePattern {
                    pattern: p2,
                    existing: e2,
                },
            ) => p1 == p2 && e1 == e2,
            (
                InvalidPatternSyntax {
                    pattern: p1,
                    position: i1,
                    reason: r1,
                },
                InvalidPatternSyntax {
                    pattern: p2,
                    position: i2,
                    reason: r2,
                },
            ) => p1 == p2 && i1 == i2 && r1 == r2,
            (ImmutablePatternSet, ImmutablePatternSet) => true,
            (UnknownLanguage(l1), UnknownLanguage(l2)) => l1 == l2,
            (Context(e1), Context(e2)) => e1 == e2,
            (Io(e1), Io(e2)) => e1.kind() == e2.kind(),
            _ => false,
        }
    }
}
