//! Bridge from raw pasted markup to the owned [`Node`] tree.
//!
//! Pasted content is routinely malformed, so it goes through an
//! engine-grade HTML parser (html5ever) with standard recovery rules, never
//! a strict XML parser. Parsing mirrors what a `DOMParser` call does in a
//! browser: build a full document, then take the body's children as the
//! fragment. This path sits inside UI event handling and therefore fails
//! soft; degenerate input yields an empty fragment instead of an error,
//! and nesting beyond [`MAX_FRAGMENT_DEPTH`] is dropped rather than
//! recursed into, so a deeply nested payload cannot exhaust the stack.

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::dom::Node;

/// Maximum element nesting converted out of the parsed document. The
/// subtree below the cap is discarded wholesale, the same policy as
/// inadmissible-element removal. The cap also bounds every recursive walk
/// downstream (prune, serialize).
pub const MAX_FRAGMENT_DEPTH: usize = 256;

/// Parse raw markup and return the children of the resulting body.
pub fn parse_body_fragment(raw: &str) -> Vec<Node> {
    if raw.is_empty() {
        return Vec::new();
    }

    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(raw);

    let Some(body) = find_body(&dom.document) else {
        // HTML parsing always synthesizes a body; guard anyway so a parser
        // surprise degrades to "nothing pasted" rather than a panic.
        log::debug!(target: "sanitize.parse", "no body element in parsed paste payload");
        return Vec::new();
    };

    body.children
        .borrow()
        .iter()
        .filter_map(|child| convert(child, 0))
        .collect()
}

fn find_body(handle: &Handle) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &handle.data {
        if &*name.local == "body" {
            return Some(handle.clone());
        }
    }
    for child in handle.children.borrow().iter() {
        if let Some(found) = find_body(child) {
            return Some(found);
        }
    }
    None
}

/// Convert one parsed node into the owned tree.
///
/// Doctypes and processing instructions cannot occur below the body; they
/// map to `None` along with anything else that is not an element, text, or
/// comment. Nodes at [`MAX_FRAGMENT_DEPTH`] or deeper also map to `None`.
fn convert(handle: &Handle, depth: usize) -> Option<Node> {
    if depth >= MAX_FRAGMENT_DEPTH {
        log::debug!(
            target: "sanitize.parse",
            "paste payload nested deeper than {MAX_FRAGMENT_DEPTH}, dropping subtree"
        );
        return None;
    }
    match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let attributes = attrs
                .borrow()
                .iter()
                .map(|a| (a.name.local.to_string(), Some(a.value.to_string())))
                .collect();
            let children = handle
                .children
                .borrow()
                .iter()
                .filter_map(|child| convert(child, depth + 1))
                .collect();
            Some(Node::Element {
                name: name.local.to_string(),
                attributes,
                children,
            })
        }
        NodeData::Text { contents } => Some(Node::Text {
            text: contents.borrow().to_string(),
        }),
        NodeData::Comment { contents } => Some(Node::Comment {
            text: contents.to_string(),
        }),
        _ => None,
    }
}
