//! Error handling

use crate::binding::{Category, Key};

/// Result type with [Error] as the default error.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the [Context](crate::Context).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A group was closed while only the outermost level was open.
    ///
    /// This is the "too many }'s" error of TeX: the document has more group
    /// closers than openers.
    #[error("there is no group to end")]
    UnbalancedGroup,

    /// A typed accessor found a value of a different kind.
    #[error("the {category} binding {key} holds a {found}, not a {expected}")]
    TypeMismatch {
        category: Category,
        key: Key,
        expected: &'static str,
        found: &'static str,
    },
}
