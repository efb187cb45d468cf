//! Owned fragment tree the tree-walking sanitizer operates on.
//!
//! One tree is built per sanitize call from the parsed paste payload and
//! discarded once the surviving markup has been serialized; nothing is
//! shared across calls.

/// A node of a parsed HTML fragment.
///
/// Attribute values are `Option` for the sake of host-built trees (the
/// shim), where a bare attribute has no value at all. Parsed trees always
/// carry `Some`: HTML parsing reports a bare attribute as an empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element {
        name: String,
        attributes: Vec<(String, Option<String>)>,
        children: Vec<Node>,
    },
    Text {
        text: String,
    },
    Comment {
        text: String,
    },
}

impl Node {
    pub fn element(name: &str, attributes: Vec<(String, Option<String>)>, children: Vec<Node>) -> Self {
        Node::Element {
            name: name.to_string(),
            attributes,
            children,
        }
    }

    pub fn text(text: &str) -> Self {
        Node::Text {
            text: text.to_string(),
        }
    }

    /// The tag name if this is an element node.
    pub fn element_name(&self) -> Option<&str> {
        match self {
            Node::Element { name, .. } => Some(name),
            _ => None,
        }
    }
}
