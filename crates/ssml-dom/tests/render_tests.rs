//! Integration tests for the plain-text renderer and tree dump.

use ssml_dom::{Element, Node, format_tree, print_tree, render};

/// Helper to build `<break time="3s"/>`
fn break_3s() -> Element {
    Element::new("break").with_attribute("time", "3s")
}

#[test]
fn test_empty_element_renders_empty() {
    assert_eq!(render(&Element::new("baz").into()), "");
}

#[test]
fn test_attributes_contribute_nothing() {
    let node: Node = Element::new("baz").with_attribute("foo", "bar").into();
    assert_eq!(render(&node), "");
}

#[test]
fn test_nested_empty_element_renders_empty() {
    let node: Node = Element::new("baz")
        .with_attribute("foo", "bar")
        .with_child(break_3s())
        .into();
    assert_eq!(render(&node), "");
}

#[test]
fn test_single_text_child() {
    let node: Node = Element::new("baz").with_child("Hello world").into();
    assert_eq!(render(&node), "Hello world");
}

#[test]
fn test_text_around_self_closing_element() {
    let node: Node = Element::new("baz")
        .with_attribute("foo", "bar")
        .with_child("Hello")
        .with_child(break_3s())
        .with_child("world!")
        .into();
    assert_eq!(render(&node), "Helloworld!");
}

#[test]
fn test_deeply_nested_text_keeps_document_order() {
    let bar = Element::new("bar")
        .with_attribute("time", "3s")
        .with_child(" ")
        .with_child(Element::new("foo"));
    let inner_p = Element::new("p").with_child(bar);
    let outer_p = Element::new("p")
        .with_child("Hello ")
        .with_child(inner_p)
        .with_child(" world");
    let node: Node = Element::new("baz")
        .with_attribute("foo", "bar")
        .with_child("baz")
        .with_child(outer_p)
        .with_child("baz")
        .into();

    assert_eq!(render(&node), "bazHello   worldbaz");
}

#[test]
fn test_text_only_at_the_bottom() {
    let foo = Element::new("foo").with_child("test");
    let bar = Element::new("bar").with_attribute("time", "3s").with_child(foo);
    let node: Node = Element::new("baz")
        .with_attribute("foo", "bar")
        .with_child(Element::new("p").with_child(Element::new("p").with_child(bar)))
        .into();

    assert_eq!(render(&node), "test");
}

#[test]
fn test_text_node_renders_itself() {
    assert_eq!(render(&Node::text("TS < JS")), "TS < JS");
}

#[test]
fn test_text_content_matches_render() {
    let node: Node = Element::new("speak")
        .with_child("a")
        .with_child(Element::new("p").with_child("b"))
        .into();
    assert_eq!(node.text_content(), render(&node));
}

#[test]
fn test_format_tree_outline() {
    let node: Node = Element::new("speak")
        .with_child("Hello world")
        .with_child(break_3s())
        .into();

    assert_eq!(
        format_tree(&node),
        "<speak>\n  \"Hello\u{00B7}world\"\n  <break time=\"3s\">\n"
    );
}

#[test]
fn test_element_accessors() {
    let element = Element::new("prosody")
        .with_attribute("rate", "slow")
        .with_attribute("rate", "fast")
        .with_child("x")
        .with_child(Element::new("break"));

    assert_eq!(element.attribute("rate"), Some("slow"));
    assert_eq!(element.attribute("pitch"), None);
    let names: Vec<&str> = element.element_children().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["break"]);
}

#[test]
fn test_print_tree_handles_nested_nodes() {
    let node: Node = Element::new("speak")
        .with_child(Element::new("p").with_child("line\nbreak"))
        .into();
    print_tree(&node, 1);
}

#[test]
fn test_node_variant_accessors() {
    let text = Node::text("Hello");
    let element: Node = Element::new("break").into();

    assert_eq!(text.as_text(), Some("Hello"));
    assert!(!text.is_element());
    assert!(text.as_element().is_none());

    assert_eq!(element.as_text(), None);
    assert!(element.is_element());
    assert_eq!(element.as_element().map(|e| e.name.as_str()), Some("break"));
}
