//! # Liang: hyphenation with Liang's patterns
//!
//! This crate implements the hyphenation algorithm of TeX,
//!   due to Frank Liang.
//! A language's hyphenation rules are given as a list of patterns like `hy3ph`:
//!   word fragments with weights between the letters.
//! To hyphenate a word, the weights of all patterns that occur in the word are combined,
//!   position by position, by taking the maximum;
//!   the word may be broken wherever the resulting weight is odd.
//!
//! ```
//! use liang::{LiangTable, Word};
//!
//! let mut table = LiangTable::new();
//! table
//!     .load_tex(r"\patterns{ hy3ph he2n hena4 hen5at 1na n2at 1tio 2io o2n }")
//!     .unwrap();
//! table.freeze();
//!
//! let word = Word::from("hyphenation");
//! let breaks = table.hyphenate(&word).unwrap();
//! assert_eq!(breaks.apply(&word, '-'), "hy-phen-ation");
//! ```
//!
//! The patterns live in a [PatternTree]; a [LiangTable] adds the exceptions and
//!   parameters of one language, and a [LanguageManager](language::LanguageManager)
//!   selects tables and parameters through a scoped [texcontext::Context].
//! The [splice] module inserts the results into horizontal lists of [node]s.

pub mod code;
pub mod config;
pub mod error;
pub mod exceptions;
pub mod language;
pub mod letter;
pub mod node;
pub mod pattern;
pub mod splice;
pub mod table;
pub mod tree;

pub use code::HyphenationCode;
pub use config::HyphenationConfig;
pub use error::{Error, Result, SyntaxError};
pub use exceptions::Exceptions;
pub use language::LanguageManager;
pub use letter::{Letter, Word};
pub use pattern::{Pattern, PatternToken};
pub use table::{BreakPoints, LiangTable};
pub use tree::PatternTree;
