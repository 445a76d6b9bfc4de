//! Integration tests for markup and JSON serialization.

use serde_json::json;
use ssml_dom::{Element, Node, escape_text};

#[test]
fn test_escape_text_ampersand_first() {
    assert_eq!(escape_text("TS &> JS"), "TS &amp;&gt; JS");
    assert_eq!(escape_text("a < b"), "a &lt; b");
    assert_eq!(escape_text("&lt;"), "&amp;lt;");
}

#[test]
fn test_display_childless_element_is_self_closing() {
    let node: Node = Element::new("break").with_attribute("time", "3s").into();
    assert_eq!(node.to_string(), r#"<break time="3s"/>"#);
}

#[test]
fn test_display_nested_document() {
    let node: Node = Element::new("speak")
        .with_attribute("xml:lang", "en-US")
        .with_child("Hello")
        .with_child(Element::new("break"))
        .with_child(Element::new("p").with_child("TS & JS"))
        .into();

    assert_eq!(
        node.to_string(),
        r#"<speak xml:lang="en-US">Hello<break/><p>TS &amp; JS</p></speak>"#
    );
}

#[test]
fn test_json_shape_text_is_bare_string() {
    let node: Node = Element::new("speak")
        .with_attribute("foo", "bar")
        .with_child("Hello")
        .into();

    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "speak",
            "attributes": [{ "name": "foo", "value": "bar" }],
            "children": ["Hello"],
        })
    );
}

#[test]
fn test_json_deserializes_into_tree() {
    let value = json!({
        "name": "speak",
        "attributes": [],
        "children": [
            "Hello",
            { "name": "break", "attributes": [{ "name": "time", "value": "3s" }], "children": [] },
            "World!"
        ],
    });

    let node: Node = serde_json::from_value(value).unwrap();
    let expected: Node = Element::new("speak")
        .with_child("Hello")
        .with_child(Element::new("break").with_attribute("time", "3s"))
        .with_child("World!")
        .into();
    assert_eq!(node, expected);
}
