//! Tree-walking sanitizer: parse, prune, serialize.
//!
//! The canonical variant. Because it works on a real parsed tree it cannot
//! be desynchronized by tag-shaped text inside attribute values, which is
//! the failure mode of [`crate::pattern::PatternSanitizer`].

use crate::allowlist::AllowList;
use crate::dom::Node;
use crate::{Sanitize, parse, serialize};

/// What happens to the attributes of elements that survive pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributePolicy {
    /// Pass every attribute through verbatim, event handlers included.
    /// This is the historical behavior of the paste cleaner.
    KeepAll,
    /// Drop `on*` handler attributes and URL attributes carrying a
    /// `javascript:` scheme. Opt-in hardening on top of the historical
    /// behavior.
    StripActive,
}

/// Structural paste sanitizer.
///
/// A pure string transform: parse the payload as an HTML document, walk the
/// body's element tree depth-first, delete every inadmissible element with
/// its whole subtree, and serialize what is left. Deletion is subtree
/// destructive on purpose: admissible descendants of a deleted element are
/// discarded with it, never unwrapped.
#[derive(Debug, Clone)]
pub struct TreeSanitizer {
    allow: AllowList,
    attribute_policy: AttributePolicy,
}

impl TreeSanitizer {
    pub fn new(allow: AllowList) -> Self {
        Self {
            allow,
            attribute_policy: AttributePolicy::KeepAll,
        }
    }

    pub fn with_attribute_policy(mut self, policy: AttributePolicy) -> Self {
        self.attribute_policy = policy;
        self
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow
    }
}

impl Sanitize for TreeSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        let mut fragment = parse::parse_body_fragment(raw);
        prune(&mut fragment, &self.allow, self.attribute_policy);
        serialize::serialize_fragment(&fragment)
    }
}

/// Prune one level of the tree, then recurse into the survivors.
///
/// Working level by level over the owned child vector is the snapshot
/// iteration the algorithm needs: a deletion can never skip or misindex a
/// sibling, unlike removal during live node-list iteration.
fn prune(children: &mut Vec<Node>, allow: &AllowList, policy: AttributePolicy) {
    children.retain(|child| match child.element_name() {
        Some(name) => {
            let keep = allow.admits(name);
            if !keep {
                log::trace!(target: "sanitize.tree", "dropping <{name}> subtree");
            }
            keep
        }
        // Text and comments are never filtered on their own; they live or
        // die with their nearest element ancestor.
        None => true,
    });

    for child in children.iter_mut() {
        if let Node::Element {
            attributes,
            children,
            ..
        } = child
        {
            if policy == AttributePolicy::StripActive {
                strip_active_attributes(attributes);
            }
            prune(children, allow, policy);
        }
    }
}

const URL_ATTRIBUTES: &[&str] = &["href", "src", "action", "formaction", "cite", "poster", "background", "data"];

fn strip_active_attributes(attributes: &mut Vec<(String, Option<String>)>) {
    attributes.retain(|(key, value)| {
        if key.len() > 2 && key[..2].eq_ignore_ascii_case("on") {
            log::trace!(target: "sanitize.tree", "stripping handler attribute {key}");
            return false;
        }
        if URL_ATTRIBUTES.iter().any(|u| key.eq_ignore_ascii_case(u)) {
            if let Some(value) = value {
                if has_javascript_scheme(value) {
                    log::trace!(target: "sanitize.tree", "stripping javascript: url in {key}");
                    return false;
                }
            }
        }
        true
    });
}

/// Scheme check after removing the whitespace and control characters that
/// HTML URL parsing ignores, so `jav\tascript:` does not slip through.
fn has_javascript_scheme(value: &str) -> bool {
    let folded: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .take("javascript:".len())
        .collect::<String>()
        .to_ascii_lowercase();
    folded == "javascript:"
}
