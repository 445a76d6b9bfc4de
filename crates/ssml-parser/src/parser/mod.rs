//! SSML parser module for tree construction.

/// Recursive-descent tree construction.
pub mod builder;
/// Fatal parse errors.
pub mod error;
/// Non-fatal parse issues.
pub mod issue;

pub use builder::{DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING, SsmlParser};
pub use error::{ParseError, ParseErrorKind};
pub use issue::{IssueKind, ParseIssue};
