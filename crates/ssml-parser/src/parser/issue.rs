//! Non-fatal parse issues.
//!
//! Issues never change the tree. They record input that parsed successfully
//! but is probably not what the author meant.

use core::fmt;

use strum_macros::{Display, EnumIter, EnumString};

/// The kind of a [`ParseIssue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum IssueKind {
    /// An attribute name repeated on one element. All copies are kept.
    DuplicateAttribute,
    /// An `&name;` sequence other than `&lt;`, `&gt;`, `&amp;`, kept as text.
    UnknownEntity,
}

/// A non-fatal observation made while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What was observed.
    pub kind: IssueKind,
    /// Byte offset into the input.
    pub offset: usize,
    /// Human-readable detail, e.g. the entity or attribute name.
    pub message: String,
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}: {}", self.kind, self.offset, self.message)
    }
}
