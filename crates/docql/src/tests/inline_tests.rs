//! Tests for fragment inlining: splicing, transitivity, idempotence, and
//! the missing-fragment failure.

use crate::editor::Editor;
use crate::passes::FragmentInliner;
use crate::passes::InlineError;
use crate::passes::inline;
use crate::tests::utils::parse_ok;

#[test]
fn spread_expands_to_the_fragment_selection() {
    let document = inline(parse_ok(
        "{ user { ...Names } }\n\nfragment Names on User { first last }",
    ))
    .unwrap();
    assert_eq!(document.to_source(), "{\n  user { first last }\n}");
}

/// Fragments spreading other fragments inline fully in one pass.
#[test]
fn inlining_is_transitive() {
    let document = inline(parse_ok(
        "{ user { ...A } }\n\n\
         fragment A on User { id ...B }\n\n\
         fragment B on User { name }",
    ))
    .unwrap();
    assert_eq!(document.to_source(), "{\n  user { id name }\n}");
}

#[test]
fn inlining_strips_fragment_definitions() {
    let document = inline(parse_ok(
        "{ ...F }\n\nfragment F on Query { version }",
    ))
    .unwrap();
    assert_eq!(document.definitions.len(), 1);
    assert!(document.fragments().is_empty());
}

/// Inlining a document with no fragments changes nothing.
#[test]
fn fragment_free_document_is_untouched() {
    let original = parse_ok("query Q { user { id name } }");
    let inlined = inline(original.clone()).unwrap();
    assert_eq!(inlined, original);
}

#[test]
fn inlining_is_idempotent() {
    let source = "{ user { ...A } }\n\n\
                  fragment A on User { id ...B }\n\n\
                  fragment B on User { name }";
    let once = inline(parse_ok(source)).unwrap();
    let twice = inline(once.clone()).unwrap();
    assert_eq!(twice, once);
}

#[test]
fn unknown_spread_target_fails() {
    let result = inline(parse_ok("{ ...Missing }"));
    assert_eq!(
        result.unwrap_err(),
        InlineError::FragmentNotFound {
            name: "Missing".to_string(),
        },
    );
}

/// The inliner alone leaves fragment definitions in place; only the
/// stripper removes them.
#[test]
fn inliner_without_stripper_keeps_definitions() {
    let document = Editor::new()
        .edit(
            parse_ok("{ ...F }\n\nfragment F on Query { version }"),
            &mut FragmentInliner,
        )
        .unwrap();
    assert_eq!(document.definitions.len(), 2);
    assert!(document.fragments().contains_key("F"));
}
