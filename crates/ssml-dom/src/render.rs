//! Flattening a tree to the text a synthesizer would speak.

use crate::Node;

/// Concatenate every text node below `node` in document order.
///
/// Element names and attributes contribute nothing, and no separators are
/// inserted between adjacent runs: `<speak>Hello<break/>world</speak>`
/// renders as `Helloworld`.
#[must_use]
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    render_into(node, &mut out);
    out
}

fn render_into(node: &Node, out: &mut String) {
    match node {
        Node::Text(data) => out.push_str(data),
        Node::Element(element) => {
            for child in &element.children {
                render_into(child, out);
            }
        }
    }
}
