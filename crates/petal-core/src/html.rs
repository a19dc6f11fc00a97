//! HTML serialization of view trees.

use crate::{Element, Node};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

impl Node {
    /// Serialize this node to HTML.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        write_node(self, &mut html);
        html
    }
}

fn write_node(node: &Node, html: &mut String) {
    match node {
        Node::Text(text) => html.push_str(&html_escape(text)),
        Node::Fragment(children) => {
            for child in children {
                write_node(child, html);
            }
        }
        Node::Element(el) => write_element(el, html),
    }
}

fn write_element(el: &Element, html: &mut String) {
    html.push('<');
    html.push_str(&el.tag);

    for (name, value) in &el.attrs {
        html.push_str(&format!(r#" {}="{}""#, name, html_escape(value)));
    }
    for (event, action) in &el.events {
        html.push_str(&format!(r#" data-on-{}="{}""#, event, html_escape(action)));
    }

    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        html.push('>');
        return;
    }

    html.push('>');
    for child in &el.children {
        write_node(child, html);
    }
    html.push_str(&format!("</{}>", el.tag));
}

/// Escape text for use in HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
