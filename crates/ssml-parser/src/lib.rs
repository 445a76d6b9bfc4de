//! SSML scanner and parser.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tag scanner** - locating `<...>` boundaries, tag names, and the
//!   open / close / self-closing distinction
//! - **Attribute parser** - strict `name="value"` lists
//! - **Entity decoding** - `&lt;`, `&gt;` and `&amp;` in text content
//! - **Tree construction** - recursive descent over element content, matching
//!   each opening tag to its closing tag and enforcing a single `<speak>` root
//!
//! # Not Supported
//!
//! - Comments, CDATA sections, processing instructions and DTDs
//! - Namespace resolution (a `prefix:` in a name is kept verbatim)
//! - Numeric and other named character references
//! - Validation of what tags and attribute values mean

/// Tree construction, errors and non-fatal issues.
pub mod parser;
/// Lexical building blocks: tags, attributes, entities.
pub mod scanner;

pub use parser::{
    DEFAULT_MAX_DEPTH, IssueKind, MAX_DEPTH_CEILING, ParseError, ParseErrorKind, ParseIssue,
    SsmlParser,
};
pub use scanner::{ScannedTag, TagKind, decode_entities, parse_attributes, scan_tag};
pub use ssml_dom::{Attribute, Element, Node, render};

/// Parse an SSML document into its `<speak>` root.
///
/// # Errors
///
/// Returns a [`ParseError`] on the first lexical or structural violation;
/// no partial tree is produced.
pub fn parse(markup: &str) -> Result<Node, ParseError> {
    SsmlParser::new(markup).run()
}

/// Parse an SSML document and flatten it to the text it speaks.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_to_text(markup: &str) -> Result<String, ParseError> {
    parse(markup).map(|root| render(&root))
}
