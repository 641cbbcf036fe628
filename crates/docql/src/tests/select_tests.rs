//! Tests for operation extraction with transitive fragment closure.

use crate::passes::SelectError;
use crate::passes::select_operation;
use crate::tests::utils::parse_ok;

const MULTI: &str = "query A { user { ...Basics } }\n\n\
                     query B { user { ...Contact } }\n\n\
                     fragment Basics on User { id ...Names }\n\n\
                     fragment Names on User { name }\n\n\
                     fragment Contact on User { email }";

#[test]
fn keeps_the_operation_and_its_fragment_closure() {
    let document = select_operation(parse_ok(MULTI), "A").unwrap();
    let names: Vec<Option<&str>> = document
        .definitions
        .iter()
        .map(|definition| definition.name())
        .collect();
    assert_eq!(names, vec![Some("A"), Some("Basics"), Some("Names")]);
}

/// Fragments only another operation needs are dropped along with it.
#[test]
fn drops_unrelated_definitions() {
    let document = select_operation(parse_ok(MULTI), "B").unwrap();
    let names: Vec<Option<&str>> = document
        .definitions
        .iter()
        .map(|definition| definition.name())
        .collect();
    assert_eq!(names, vec![Some("B"), Some("Contact")]);
}

#[test]
fn fragment_free_operation_selects_alone() {
    let document = select_operation(
        parse_ok("query A { version }\n\nquery B { version }"),
        "A",
    )
    .unwrap();
    assert_eq!(document.definitions.len(), 1);
    assert_eq!(document.definitions[0].name(), Some("A"));
}

/// Spreads inside inline fragments count as dependencies too.
#[test]
fn closure_reaches_through_inline_fragments() {
    let document = select_operation(
        parse_ok(
            "query A { user { ... on User { ...Names } } }\n\n\
             fragment Names on User { name }",
        ),
        "A",
    )
    .unwrap();
    assert_eq!(document.definitions.len(), 2);
}

#[test]
fn unknown_operation_fails() {
    let result = select_operation(parse_ok("query A { version }"), "Missing");
    assert_eq!(
        result.unwrap_err(),
        SelectError::OperationNotFound {
            name: "Missing".to_string(),
        },
    );
}
