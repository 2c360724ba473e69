//! HTML serialization of element trees.

use crate::element::{Content, Element};

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Serialize an element and its subtree (`outerHTML`).
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

/// Serialize only the children of an element (`innerHTML`).
pub fn inner_html(element: &Element) -> String {
    let mut out = String::new();
    write_content(&mut out, element);
    out
}

fn write_element(out: &mut String, element: &Element) {
    if element.is_text() {
        write_content(out, element);
        return;
    }

    out.push('<');
    out.push_str(&element.tag);
    if let Some(id) = element.html_id() {
        write_attr(out, "id", id);
    }
    if !element.classes.is_empty() {
        write_attr(out, "class", &element.classes.join(" "));
    }
    for (name, value) in &element.attributes {
        write_attr(out, name, value);
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag.as_str()) {
        return;
    }

    write_content(out, element);
    out.push_str(&format!("</{}>", element.tag));
}

fn write_content(out: &mut String, element: &Element) {
    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                write_element(out, child);
            }
        }
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
}

pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
