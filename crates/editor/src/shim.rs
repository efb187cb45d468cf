//! Attribute-name compatibility shim over a mutated subtree.
//!
//! Markup rendered for an older toolkit generation can carry attribute
//! names the current one ignores (`data-toggle` vs `data-bs-toggle`). The
//! shim rewrites such names wherever they appear in a subtree, and is
//! re-applied from a subtree-scoped mutation notification rather than any
//! polling: the host calls [`MutationWatcher::nodes_added`] with whatever
//! it just attached.

use sanitize::Node;

/// One name-to-name attribute rewrite.
#[derive(Debug, Clone)]
pub struct AttributeRewrite {
    attr: String,
    replacement: String,
    guard_value: Option<String>,
}

impl AttributeRewrite {
    pub fn new(attr: &str, replacement: &str) -> Self {
        Self {
            attr: attr.to_string(),
            replacement: replacement.to_string(),
            guard_value: None,
        }
    }

    /// Only rewrite elements whose current attribute value equals `value`.
    pub fn with_guard_value(mut self, value: &str) -> Self {
        self.guard_value = Some(value.to_string());
        self
    }

    /// The `data-toggle="dropdown"` to `data-bs-toggle` migration.
    pub fn bootstrap5_toggle() -> Self {
        Self::new("data-toggle", "data-bs-toggle").with_guard_value("dropdown")
    }

    /// Rewrite this element and everything below it.
    pub fn apply(&self, node: &mut Node) {
        if let Node::Element {
            attributes,
            children,
            ..
        } = node
        {
            self.apply_to_attributes(attributes);
            for child in children.iter_mut() {
                self.apply(child);
            }
        }
    }

    fn apply_to_attributes(&self, attributes: &mut Vec<(String, Option<String>)>) {
        let Some(pos) = attributes.iter().position(|(key, value)| {
            key == &self.attr
                && match (&self.guard_value, value) {
                    (Some(guard), Some(value)) => guard == value,
                    (Some(_), None) => false,
                    (None, _) => true,
                }
        }) else {
            return;
        };

        let (_, value) = attributes.remove(pos);
        if let Some(existing) = attributes.iter_mut().find(|(key, _)| key == &self.replacement) {
            existing.1 = value;
        } else {
            attributes.push((self.replacement.clone(), value));
        }
        log::trace!(
            target: "editor.shim",
            "rewrote {} to {}", self.attr, self.replacement
        );
    }
}

/// Applies a set of rewrites to a watched subtree, once on attach and then
/// on every added-nodes notification.
#[derive(Debug, Default)]
pub struct MutationWatcher {
    rewrites: Vec<AttributeRewrite>,
}

impl MutationWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch(&mut self, rewrite: AttributeRewrite) {
        self.rewrites.push(rewrite);
    }

    /// Initial pass over the subtree being watched.
    pub fn attach(&self, subtree: &mut Node) {
        self.apply_all(subtree);
    }

    /// Notification entry point: the host attached `subtree` below the
    /// watched root.
    pub fn nodes_added(&self, subtree: &mut Node) {
        self.apply_all(subtree);
    }

    fn apply_all(&self, subtree: &mut Node) {
        for rewrite in &self.rewrites {
            rewrite.apply(subtree);
        }
    }
}
