//! Tests for the text renderer and the parse/print round-trip property.

use crate::parse;
use crate::tests::utils::parse_ok;

fn printed(source: &str) -> String {
    parse_ok(source).to_source()
}

/// Rendering is re-parseable and structurally faithful:
/// `parse(print(parse(s)))` equals `parse(s)`.
fn assert_round_trip(source: &str) {
    let document = parse_ok(source);
    let rendered = document.to_source();
    let reparsed = parse(&rendered)
        .unwrap_or_else(|error| panic!("rendered text failed to parse: {error}\n{rendered}"));
    assert_eq!(reparsed, document, "round trip diverged for:\n{rendered}");
}

// =============================================================================
// Layout
// =============================================================================

/// An implicit anonymous query renders as a bare block selection.
#[test]
fn implicit_query_renders_bare() {
    assert_eq!(printed("{ id }"), "{\n  id\n}");
}

#[test]
fn named_operation_header() {
    assert_eq!(
        printed("query Q($x: Int = 10) { f(id: $x) }"),
        "query Q($x: Int = 10) {\n  f(id: $x)\n}",
    );
}

/// A nested selection set of bare fields packs onto one line.
#[test]
fn nested_simple_fields_compact() {
    assert_eq!(
        printed("query Q { user { id name email } }"),
        "query Q {\n  user { id name email }\n}",
    );
}

/// An anonymous query with no variables or directives always renders in the
/// implicit form; the keyword is not part of the tree.
#[test]
fn anonymous_query_renders_implicit() {
    assert_eq!(printed("query { id }"), "{\n  id\n}");
}

/// More than five fields always take the block form.
#[test]
fn compact_form_caps_at_five_fields() {
    assert_eq!(
        printed("{ u { a b c d e f } }"),
        "{\n  u {\n    a\n    b\n    c\n    d\n    e\n    f\n  }\n}",
    );
}

/// A non-bare item (arguments, alias, directives, sub-selection) forces the
/// block form.
#[test]
fn compact_form_requires_bare_fields() {
    assert_eq!(
        printed("{ u { a(x: 1) b } }"),
        "{\n  u {\n    a(x: 1)\n    b\n  }\n}",
    );
}

/// The one-line form is abandoned once it would overflow the column limit.
#[test]
fn compact_form_respects_column_limit() {
    let long = "abcdefghijklmnopqrstuvwxyz0123456789_".repeat(3);
    let source = format!("{{ u {{ {long} ok }} }}");
    let rendered = printed(&source);
    assert!(
        rendered.contains(&format!("{{\n    {long}\n    ok\n  }}")),
        "expected block form, got:\n{rendered}",
    );
}

#[test]
fn definitions_separated_by_blank_line() {
    assert_eq!(
        printed("query A { x } fragment F on T { y z }"),
        "query A {\n  x\n}\n\nfragment F on T {\n  y\n  z\n}",
    );
}

/// Fragment bodies always render in block form, even when simple.
#[test]
fn fragment_renders_block_body() {
    assert_eq!(printed("fragment F on T { y }"), "fragment F on T {\n  y\n}");
}

#[test]
fn operation_directives_render_in_header() {
    assert_eq!(
        printed("query Q @cached { id }"),
        "query Q @cached {\n  id\n}",
    );
}

#[test]
fn inline_fragment_rendering() {
    assert_eq!(
        printed("{ ... on User { id name } }"),
        "{\n  ... on User { id name }\n}",
    );
    assert_eq!(
        printed("{ ... @defer { id } }"),
        "{\n  ... @defer { id }\n}",
    );
}

#[test]
fn fragment_spread_rendering() {
    assert_eq!(printed("{ ...F @skip(if: true) }"), "{\n  ...F @skip(if: true)\n}");
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn value_rendering() {
    assert_eq!(
        printed(r#"{ f(a: 1, b: 1.5, c: "hi", d: true, e: null, f: RED, g: [1, 2], h: {x: 1}) }"#),
        "{\n  f(a: 1, b: 1.5, c: \"hi\", d: true, e: null, f: RED, g: [1, 2], h: {x: 1})\n}",
    );
}

/// Numeric literals keep their written shape through a print cycle.
#[test]
fn numbers_render_losslessly() {
    assert_eq!(
        printed("{ f(a: 1e6, b: -0.000001, c: 1.01) }"),
        "{\n  f(a: 1e6, b: -0.000001, c: 1.01)\n}",
    );
}

#[test]
fn strings_render_escaped() {
    assert_eq!(
        printed("{ f(a: \"line\\nbreak \\\"quoted\\\"\") }"),
        "{\n  f(a: \"line\\nbreak \\\"quoted\\\"\")\n}",
    );
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn round_trips() {
    for source in [
        "{ id }",
        "query { id }",
        "query Q { user { id name } }",
        "mutation M($input: CreateUserInput!) { createUser(input: $input) { id } }",
        "subscription S { tick }",
        "query Q($x: Int = 10, $y: [String!] = [\"a\"]) { f(id: $x, names: $y) }",
        "{ profile: user(id: 4) @include(if: $flag) { ...Parts ... on Admin { scope } } }",
        "fragment Parts on User { id name friends { id } }",
        "query A { x } query B { y } fragment F on T { z }",
        r#"{ f(o: {a: [1, 2.5, -3e4], b: {nested: "deep"}, c: null, d: ENUM_VALUE}) }"#,
        "{ f(s: \"tab\\t and \\u0007 bell\") }",
        "query Q @cached @internal(level: 2) { id }",
        "{ ... @defer { id } }",
    ] {
        assert_round_trip(source);
    }
}

/// Block strings decode to plain strings and re-render in quoted form.
#[test]
fn block_string_round_trips_decoded() {
    let document = parse_ok("{ f(s: \"\"\"\n    multi\n    line\n\"\"\") }");
    let rendered = document.to_source();
    assert_eq!(rendered, "{\n  f(s: \"multi\\nline\")\n}");
    assert_round_trip(&rendered);
}
