//! Debug view of a parsed tree, one node per line.

use core::fmt::Write;

use crate::Node;

/// Render `node` and its descendants as an indented outline.
///
/// Elements print as their open tag, text prints quoted with spaces shown as
/// `·` and newlines as `\n` so that whitespace differences are visible.
#[must_use]
pub fn format_tree(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

/// Print a tree to stdout for debugging.
pub fn print_tree(node: &Node, indent: usize) {
    let mut out = String::new();
    write_node(&mut out, node, indent);
    print!("{out}");
}

fn write_node(out: &mut String, node: &Node, indent: usize) {
    let prefix = "  ".repeat(indent);
    // Writing into a String cannot fail.
    let _ = match node {
        Node::Text(data) => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            writeln!(out, "{prefix}\"{display}\"")
        }
        Node::Element(element) => {
            if element.attributes.is_empty() {
                writeln!(out, "{prefix}<{}>", element.name)
            } else {
                let attrs: Vec<String> = element
                    .attributes
                    .iter()
                    .map(|attr| format!("{}=\"{}\"", attr.name, attr.value))
                    .collect();
                writeln!(out, "{prefix}<{} {}>", element.name, attrs.join(" "))
            }
        }
    };
    if let Node::Element(element) = node {
        for child in &element.children {
            write_node(out, child, indent + 1);
        }
    }
}
