//! The allow-list of element types permitted to survive sanitization.

use std::collections::HashSet;

/// Tags the editor accepts from a paste.
///
/// One canonical list shared by both sanitizer variants: basic text
/// structure, inline formatting, the six heading levels, lists, and simple
/// tables. Anything interactive or embedding (script, iframe, form, object,
/// img, ...) is absent on purpose.
pub(crate) const EDITOR_DEFAULT_TAGS: &[&str] = &[
    "a", "div", "p", "br", "span", "em", "i", "li", "ol", "ul", "strong", "h1", "h2", "h3", "h4",
    "h5", "h6", "table", "tbody", "thead", "tr", "td", "abbr", "acronym", "b", "blockquote",
    "code", "strike", "u", "sup", "sub",
];

/// Immutable set of lower-cased tag names.
///
/// Membership is case-insensitive on ASCII. The set never changes during a
/// sanitize call; both variants consult the same instance.
#[derive(Debug, Clone)]
pub struct AllowList {
    tags: HashSet<String>,
}

impl AllowList {
    /// The canonical editor allow-list.
    pub fn editor_default() -> Self {
        Self::from_tags(EDITOR_DEFAULT_TAGS)
    }

    /// Build a custom allow-list. Names are case-folded on construction.
    pub fn from_tags(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|t| t.to_ascii_lowercase()).collect(),
        }
    }

    /// Whether an element with this tag name may survive sanitization.
    pub fn admits(&self, tag: &str) -> bool {
        // HTML parsers hand us lower-cased names already; only fold when
        // the input actually carries upper-case ASCII.
        if tag.bytes().any(|b| b.is_ascii_uppercase()) {
            self.tags.contains(&tag.to_ascii_lowercase())
        } else {
            self.tags.contains(tag)
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
