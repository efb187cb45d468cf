//! Pattern-matching sanitizer: strip tag shapes textually, without parsing.
//!
//! The older variant of the paste cleaner, kept alongside the tree walker
//! because existing content was filtered by it. It scans for anything
//! shaped like a tag (`<...>`) and keeps the match only when the extracted
//! tag name is admissible; everything else that looks like a tag is
//! deleted and all remaining text passes through untouched.
//!
//! Known flaws, reproduced deliberately and pinned by tests rather than
//! fixed here:
//! - attributes on surviving tags are never examined;
//! - text content of a removed element survives (only the tags go);
//! - a tag shape inside an attribute value desynchronizes the scan.
//!
//! New callers should prefer [`crate::tree::TreeSanitizer`].

use std::sync::OnceLock;

use regex::Regex;

use crate::Sanitize;
use crate::allowlist::AllowList;

static TAG_SHAPE: OnceLock<Regex> = OnceLock::new();

fn tag_shape() -> &'static Regex {
    TAG_SHAPE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag shape pattern is valid"))
}

/// Textual paste sanitizer.
#[derive(Debug, Clone)]
pub struct PatternSanitizer {
    allow: AllowList,
}

impl PatternSanitizer {
    pub fn new(allow: AllowList) -> Self {
        Self { allow }
    }

    fn keeps(&self, tag: &str) -> bool {
        match tag_name(tag) {
            Some(name) => self.allow.admits(name),
            None => false,
        }
    }
}

impl Sanitize for PatternSanitizer {
    fn sanitize(&self, raw: &str) -> String {
        tag_shape()
            .replace_all(raw, |caps: &regex::Captures<'_>| {
                let tag = &caps[0];
                if self.keeps(tag) {
                    tag.to_string()
                } else {
                    log::trace!(target: "sanitize.pattern", "stripping tag shape {tag:?}");
                    String::new()
                }
            })
            .into_owned()
    }
}

/// Extract the tag name from a `<...>` match: skip the `<` and an optional
/// `/`, then take the leading ASCII alphanumeric run. Comments, doctypes,
/// and shapes like `< 2 >` have no name and are always stripped.
fn tag_name(tag: &str) -> Option<&str> {
    let inner = tag.strip_prefix('<')?;
    let inner = inner.strip_prefix('/').unwrap_or(inner);
    let end = inner
        .bytes()
        .position(|b| !b.is_ascii_alphanumeric())
        .unwrap_or(inner.len());
    if end == 0 { None } else { Some(&inner[..end]) }
}
