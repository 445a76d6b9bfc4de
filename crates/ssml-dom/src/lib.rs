//! Node tree for parsed SSML documents.
//!
//! [SSML 1.1 § 2.1 Document Form](https://www.w3.org/TR/speech-synthesis11/#S2.1)
//!
//! # Design
//!
//! A parsed document is an owned tree of [`Node`] values. Unlike an HTML DOM
//! there are no parent or sibling links: the tree is built bottom-up by the
//! parser, never mutated afterwards, and only ever walked from the root down.
//! A plain recursive enum is therefore enough, and the renderer's dispatch
//! over it is checked for exhaustiveness by the compiler.

use serde::{Deserialize, Serialize};

/// Markup serialization (`Display`) and text escaping.
pub mod markup;
/// Plain-text projection of a tree.
pub mod render;
/// Indented debugging dump of a tree.
pub mod tree;

pub use markup::escape_text;
pub use render::render;
pub use tree::{format_tree, print_tree};

/// A `name="value"` pair on an element.
///
/// Attribute values are kept exactly as written between the double quotes;
/// entities are only decoded in text content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    /// The attribute name, possibly carrying a `prefix:` part.
    pub name: String,
    /// The raw value between the quotes.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named node with attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, e.g. `speak`, `break` or `amazon:effect`.
    pub name: String,
    /// Attributes in source order. Duplicate names are all retained.
    pub attributes: Vec<Attribute>,
    /// Child nodes in document order. Empty for self-closing elements.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder: append an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Builder: append a child node.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Value of the first attribute called `name`, if any.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Iterate over the children that are elements, skipping text.
    pub fn element_children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }
}

/// A node in a parsed document: either an element or a run of text.
///
/// Serializes untagged, so a text node is a bare JSON string and an element
/// is an object with `name`, `attributes` and `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Decoded character content.
    Text(String),
    /// A named element.
    Element(Element),
}

impl Node {
    /// Shorthand for a text node.
    #[must_use]
    pub fn text(data: impl Into<String>) -> Self {
        Self::Text(data.into())
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(data) => Some(data),
            Self::Element(_) => None,
        }
    }

    /// Returns true for element nodes.
    #[must_use]
    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// All text below this node, concatenated in document order.
    ///
    /// Same as [`render`].
    #[must_use]
    pub fn text_content(&self) -> String {
        render(self)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(data: &str) -> Self {
        Self::Text(data.to_string())
    }
}

impl From<String> for Node {
    fn from(data: String) -> Self {
        Self::Text(data)
    }
}
