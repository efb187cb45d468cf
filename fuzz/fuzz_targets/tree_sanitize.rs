#![no_main]

use libfuzzer_sys::fuzz_target;
use sanitize::{AllowList, Node, Sanitize, TreeSanitizer, parse};

fn assert_closed_under(nodes: &[Node], allow: &AllowList) {
    for node in nodes {
        if let Node::Element { name, children, .. } = node {
            assert!(allow.admits(name), "<{name}> leaked into sanitized output");
            assert_closed_under(children, allow);
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let sanitizer = TreeSanitizer::new(AllowList::editor_default());

    let once = sanitizer.sanitize(raw);
    assert_closed_under(&parse::parse_body_fragment(&once), sanitizer.allow_list());

    let twice = sanitizer.sanitize(&once);
    assert_eq!(once, twice, "sanitize is not idempotent for {raw:?}");
});
