//! Writing a tree back out as SSML markup.
//!
//! The output is canonical: no whitespace inside tags, attribute values in
//! double quotes, childless elements written self-closing. Text is escaped so
//! that parsing the output yields the same tree again.

use core::fmt;

use crate::{Element, Node};

/// Escape text content for inclusion in markup.
///
/// `&` is replaced first so the `&` of the other two entities is not doubled.
#[must_use]
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for attr in &self.attributes {
            write!(f, " {}=\"{}\"", attr.name, attr.value)?;
        }
        if self.children.is_empty() {
            return write!(f, "/>");
        }
        write!(f, ">")?;
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.name)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(data) => f.write_str(&escape_text(data)),
            Self::Element(element) => write!(f, "{element}"),
        }
    }
}
