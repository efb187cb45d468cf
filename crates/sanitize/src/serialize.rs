//! innerHTML-style serialization of the owned fragment tree.

use memchr::{memchr2, memchr3};

use crate::dom::Node;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Serialize a fragment back to markup.
///
/// Output matches what a browser reports as `innerHTML`: text escapes
/// `& < >`, attribute values escape `& "`, void elements emit no end tag.
/// Re-parsing the output reproduces the same tree, which is what makes the
/// tree sanitizer idempotent.
pub fn serialize_fragment(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => escape_text(text, out),
        Node::Comment { text } => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        Node::Element {
            name,
            attributes,
            children,
        } => {
            out.push('<');
            out.push_str(name);
            for (key, value) in attributes {
                out.push(' ');
                out.push_str(key);
                if let Some(value) = value {
                    out.push_str("=\"");
                    escape_attr(value, out);
                    out.push('"');
                }
            }
            out.push('>');
            if is_void(name) {
                return;
            }
            for child in children {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| name.eq_ignore_ascii_case(v))
}

fn escape_text(text: &str, out: &mut String) {
    let bytes = text.as_bytes();
    let mut start = 0;
    while let Some(rel) = memchr3(b'&', b'<', b'>', &bytes[start..]) {
        let pos = start + rel;
        out.push_str(&text[start..pos]);
        out.push_str(match bytes[pos] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            _ => "&gt;",
        });
        start = pos + 1;
    }
    out.push_str(&text[start..]);
}

fn escape_attr(value: &str, out: &mut String) {
    let bytes = value.as_bytes();
    let mut start = 0;
    while let Some(rel) = memchr2(b'&', b'"', &bytes[start..]) {
        let pos = start + rel;
        out.push_str(&value[start..pos]);
        out.push_str(match bytes[pos] {
            b'&' => "&amp;",
            _ => "&quot;",
        });
        start = pos + 1;
    }
    out.push_str(&value[start..]);
}
