//! # sanitize
//!
//! Allow-list HTML sanitization for pasted rich-text content.
//!
//! Clipboard HTML can originate anywhere (word processors, other pages,
//! hostile content), so the pasted markup is reduced to a fixed allow-list
//! of element types before it is inserted into the edit surface:
//! - [`TreeSanitizer`]: parses the payload with an engine-grade HTML parser
//!   and prunes the resulting tree. This is the canonical variant.
//! - [`PatternSanitizer`]: strips tag-shaped substrings textually without
//!   parsing. Kept for compatibility; superseded by the tree variant.
//!
//! Both variants are pure string-to-string transforms with no state between
//! calls, and both fail soft: degenerate input produces empty output, never
//! an error, because the callers sit inside UI event handlers.

pub mod allowlist;
pub mod dom;
pub mod parse;
pub mod pattern;
pub mod serialize;
pub mod tree;

pub use crate::allowlist::AllowList;
pub use crate::dom::Node;
pub use crate::pattern::PatternSanitizer;
pub use crate::tree::{AttributePolicy, TreeSanitizer};

/// The seam between sanitizer variants and their callers.
///
/// Implementations must be pure per call: same input, same output, no
/// retained state, and no failure path (degraded output instead).
pub trait Sanitize {
    fn sanitize(&self, raw: &str) -> String;
}
