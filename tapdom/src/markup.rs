//! Serialization of an element tree to markup text.
//!
//! Output order is: `id`, then attributes in insertion order, then `class`.
//! Empty class lists are omitted.

use std::fmt::Write;

use crate::element::{Content, Element};

/// Render the tree rooted at `root` as markup text.
pub fn to_markup(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);

    if let Some(id) = &el.id {
        write_attr(out, "id", id);
    }
    for (name, value) in &el.attributes {
        write_attr(out, name, value);
    }
    if !el.classes.is_empty() {
        write_attr(out, "class", &el.classes.join(" "));
    }
    out.push('>');

    match &el.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    let _ = write!(out, "</{}>", el.tag);
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"{}\"", escape(value));
}

fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
