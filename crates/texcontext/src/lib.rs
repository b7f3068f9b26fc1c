//! # Texcontext: dynamically scoped interpreter state
//!
//! This crate implements the state an interpreter for the TeX language keeps
//! while it processes a document: the meaning of control sequences, the
//! registers, the code tables, the current font and so on.
//!
//! All of this state is subject to TeX's grouping rules.
//! Opening a group (with a brace, `\begingroup`, a box, math mode...) starts a
//! new frame; local assignments made in the frame are undone when it closes,
//! and global assignments outlive all open frames.
//! The [Context] type is the entry point; the grouping machinery itself is the
//! generic [ScopedMap](scopedmap::ScopedMap).

pub mod binding;
pub mod context;
pub mod defaults;
pub mod error;
pub mod group;
pub mod scopedmap;
pub mod types;

pub use binding::{Category, Key, Value};
pub use context::Context;
pub use error::{Error, Result};
pub use group::{AfterGroup, GroupType};
pub use scopedmap::Scope;
pub use types::*;
