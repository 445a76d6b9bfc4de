//! Parse errors.
//!
//! Parsing is all-or-nothing: the first violation aborts the parse and is
//! returned as a [`ParseError`].

use thiserror::Error;

/// Longest fragment (in characters) kept in an error.
const MAX_FRAGMENT_CHARS: usize = 48;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A tag marker with no name: `<>`, `< >`, `< />`, `</>`.
    #[error("tag has no name")]
    UnnamedTag,
    /// Attribute text that is not a list of `name="value"` pairs.
    #[error("invalid attribute syntax")]
    InvalidAttributeSyntax,
    /// A closing tag inside an element with a different name.
    #[error("closing tag </{found}> does not match open element <{expected}>")]
    MismatchedTag {
        /// Name of the element that is open.
        expected: String,
        /// Name in the closing tag that was found.
        found: String,
    },
    /// An opening tag whose closing tag never appears.
    #[error("element <{name}> is never closed")]
    MissingClosingTag {
        /// Name of the unclosed element.
        name: String,
    },
    /// A closing tag with no element open to close.
    #[error("closing tag </{name}> has no matching opening tag")]
    UnexpectedClosingTag {
        /// Name in the stray closing tag.
        name: String,
    },
    /// More than one node at the top level.
    #[error("document must have a single root element, found {count} top-level nodes")]
    MultipleRootNodes {
        /// Number of top-level nodes found.
        count: usize,
    },
    /// The document is empty, or its single top-level node is not `<speak>`.
    #[error("document root must be a <speak> element")]
    MissingRootSpeakTag,
    /// A `<` with no `>` after it.
    #[error("tag is never terminated by '>'")]
    UnterminatedTag,
    /// Elements nested deeper than the parser's depth limit.
    #[error("elements are nested more than {limit} levels deep")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
    },
}

/// A fatal parse error with its location in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}: `{fragment}`")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Byte offset into the input where the problem was detected.
    pub offset: usize,
    /// The offending tag or attribute text, shortened for display.
    pub fragment: String,
}

impl ParseError {
    /// Create an error, truncating `fragment` to a displayable length.
    #[must_use]
    pub fn new(kind: ParseErrorKind, offset: usize, fragment: &str) -> Self {
        let mut chars = fragment.chars();
        let mut fragment: String = chars.by_ref().take(MAX_FRAGMENT_CHARS).collect();
        if chars.next().is_some() {
            fragment.push('…');
        }
        Self {
            kind,
            offset,
            fragment,
        }
    }
}
