//! End-to-end properties of the tree-walking sanitizer over realistic
//! paste payloads.

use sanitize::{AllowList, Node, Sanitize, TreeSanitizer, parse};

fn sanitizer() -> TreeSanitizer {
    TreeSanitizer::new(AllowList::editor_default())
}

/// Walk a fragment and assert every element tag is admissible.
fn assert_closed_under(nodes: &[Node], allow: &AllowList) {
    for node in nodes {
        if let Node::Element { name, children, .. } = node {
            assert!(allow.admits(name), "<{name}> leaked into sanitized output");
            assert_closed_under(children, allow);
        }
    }
}

#[test]
fn output_only_contains_admissible_elements() {
    let inputs = [
        "<p>Hello <b>World</b></p>",
        "<script>alert(1)</script><p onclick=\"x\">a</p>",
        "<h1>t</h1><video controls><source src=\"v\"></video>",
        "<div><form><input name=\"a\"><button>go</button></form></div>",
        "word <iframe src=\"x\"></iframe> processor <meta charset=\"utf-8\"> junk",
    ];
    let sanitizer = sanitizer();
    for input in inputs {
        let out = sanitizer.sanitize(input);
        let reparsed = parse::parse_body_fragment(&out);
        assert_closed_under(&reparsed, sanitizer.allow_list());
    }
}

#[test]
fn removal_is_subtree_destructive() {
    // The nested <p> is itself admissible, but its <form> ancestor is not;
    // the whole subtree goes, text included.
    let out = sanitizer().sanitize("<ul><li>keep</li></ul><form><p>lost</p></form>");
    assert_eq!(out, "<ul><li>keep</li></ul>");

    let out = sanitizer().sanitize("<section><h2>also lost</h2></section>");
    assert_eq!(out, "");
}

#[test]
fn sanitizing_twice_is_byte_identical() {
    let inputs = [
        "<p>Hello <script>alert(1)</script>World</p>",
        "<table><tr><td>x &amp; y</td></tr></table>",
        "<div onclick=\"evil()\">click</div>",
        "<p>Unclosed <b>bold",
        "plain text with 1 < 2 arrows",
    ];
    let sanitizer = sanitizer();
    for input in inputs {
        let once = sanitizer.sanitize(input);
        let twice = sanitizer.sanitize(&once);
        assert_eq!(once, twice, "not idempotent for {input:?}");
    }
}

#[test]
fn script_element_is_removed_with_its_raw_text() {
    // "World" is a sibling text node of the <script> element under HTML
    // parsing, so it stays; the script's own text goes with the element.
    let out = sanitizer().sanitize("<p>Hello <script>alert(1)</script>World</p>");
    assert_eq!(out, "<p>Hello World</p>");
}

#[test]
fn heading_survives_iframe_removal() {
    let out = sanitizer().sanitize("<h3>Title</h3><iframe src=\"x\"></iframe>");
    assert_eq!(out, "<h3>Title</h3>");
}

#[test]
fn event_handler_attributes_pass_through_by_default() {
    let out = sanitizer().sanitize("<div onclick=\"evil()\">click</div>");
    assert_eq!(out, "<div onclick=\"evil()\">click</div>");
}

#[test]
fn unclosed_tags_are_recovered_not_rejected() {
    let out = sanitizer().sanitize("<p>Unclosed <b>bold");
    assert_eq!(out, "<p>Unclosed <b>bold</b></p>");
}

#[test]
fn parser_normalization_shows_through() {
    // HTML parsing inserts the implied <tbody>; the sanitizer reports what
    // the tree actually contains.
    let out = sanitizer().sanitize("<table><tr><td>x</td></tr></table>");
    assert_eq!(out, "<table><tbody><tr><td>x</td></tr></tbody></table>");
}

#[test]
fn word_processor_namespaced_tags_are_dropped() {
    let out = sanitizer().sanitize("<p>before</p><o:p>office</o:p>");
    assert_eq!(out, "<p>before</p>");
}

#[test]
fn comments_survive_inside_admissible_ancestors() {
    let out = sanitizer().sanitize("<p>a<!-- note -->b</p>");
    assert_eq!(out, "<p>a<!-- note -->b</p>");
}

#[test]
fn entities_round_trip_through_parse_and_serialize() {
    let out = sanitizer().sanitize("<p>a &amp; b &lt; c</p>");
    assert_eq!(out, "<p>a &amp; b &lt; c</p>");
}

#[test]
fn deeply_nested_input_is_clipped_not_fatal() {
    // 10 000 nested divs is a valid clipboard payload; it must come out
    // clipped at the fragment depth cap, not take the process down.
    let mut raw = String::with_capacity(10_000 * "<div>".len() + 1);
    for _ in 0..10_000 {
        raw.push_str("<div>");
    }
    raw.push('x');

    let sanitizer = sanitizer();
    let out = sanitizer.sanitize(&raw);
    assert_eq!(out.matches("<div>").count(), parse::MAX_FRAGMENT_DEPTH);
    assert_eq!(out.matches("</div>").count(), parse::MAX_FRAGMENT_DEPTH);
    assert!(!out.contains('x'));
    // Clipped output is stable under re-sanitization.
    assert_eq!(sanitizer.sanitize(&out), out);
}

#[test]
fn bare_attribute_round_trips_as_empty_valued() {
    let out = sanitizer().sanitize("<div hidden>x</div>");
    assert_eq!(out, r#"<div hidden="">x</div>"#);
    assert_eq!(sanitizer().sanitize(&out), out);
}

#[test]
fn custom_allow_lists_are_honored() {
    let strict = TreeSanitizer::new(AllowList::from_tags(&["p", "b"]));
    let out = strict.sanitize("<p>one <b>two</b> <em>three</em></p>");
    assert_eq!(out, "<p>one <b>two</b> </p>");
}
