//! Tests for the grammar: operations, fragments, selections, arguments,
//! values, variables, directives, and type annotations.

use crate::ParseError;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::parse;
use crate::parse_type;
use crate::tests::utils::field_at;
use crate::tests::utils::first_fragment;
use crate::tests::utils::first_operation;
use crate::tests::utils::parse_ok;

// =============================================================================
// Operations
// =============================================================================

/// A bare selection set is an implicit anonymous query.
#[test]
fn implicit_anonymous_query() {
    let document = parse_ok("{ id }");
    assert_eq!(document.definitions.len(), 1);

    let operation = first_operation(&document);
    assert_eq!(operation.kind, OperationKind::Query);
    assert!(operation.name.is_none());
    assert_eq!(operation.selection_set.len(), 1);
    assert_eq!(field_at(&operation.selection_set, 0).name, "id");
}

#[test]
fn named_query() {
    let document = parse_ok("query GetUser { name }");
    let operation = first_operation(&document);
    assert_eq!(operation.kind, OperationKind::Query);
    assert_eq!(operation.name.as_deref(), Some("GetUser"));
}

#[test]
fn anonymous_keyword_query() {
    let operation_name = first_operation(&parse_ok("query { name }")).name.clone();
    assert!(operation_name.is_none());
}

#[test]
fn mutation_and_subscription() {
    let document = parse_ok("mutation M { save { id } }\n\nsubscription S { tick }");
    let operations = document.operations();
    assert_eq!(operations.len(), 2);
    assert_eq!(
        operations[&Some("M")].kind,
        OperationKind::Mutation,
    );
    assert_eq!(
        operations[&Some("S")].kind,
        OperationKind::Subscription,
    );
}

/// An operation keyword that is not `query`/`mutation`/`subscription` cannot
/// start a definition.
#[test]
fn unknown_operation_keyword_fails() {
    assert!(parse("theory Q { id }").is_err());
}

#[test]
fn multiple_definitions_preserve_order() {
    let document = parse_ok("query A { x }\nfragment F on T { y }\nquery B { z }");
    let names: Vec<Option<&str>> = document
        .definitions
        .iter()
        .map(|definition| definition.name())
        .collect();
    assert_eq!(names, vec![Some("A"), Some("F"), Some("B")]);
}

// =============================================================================
// Variables
// =============================================================================

/// Scenario: `query Q($x: Int = 10)` declares `x: Int` with default `10`.
#[test]
fn variable_definition_with_default() {
    let document = parse_ok("query Q($x: Int = 10) { f(id: $x) }");
    let operation = first_operation(&document);

    assert_eq!(operation.variable_definitions.len(), 1);
    let definition = &operation.variable_definitions[0];
    assert_eq!(definition.name, "x");
    assert_eq!(definition.annotation, TypeAnnotation::named("Int"));
    assert_eq!(
        definition.default_value,
        Some(Value::Int(10.into())),
    );

    let field = field_at(&operation.selection_set, 0);
    assert_eq!(field.arguments[0].value, Value::variable("x"));
}

#[test]
fn variable_definitions_with_wrapping_and_directives() {
    let document = parse_ok("query Q($ids: [ID!]! @sensitive, $limit: Int) { f }");
    let definitions = &first_operation(&document).variable_definitions;
    assert_eq!(definitions.len(), 2);
    assert_eq!(
        definitions[0].annotation,
        TypeAnnotation::list_of(TypeAnnotation::named("ID").non_null()).non_null(),
    );
    assert_eq!(definitions[0].directives[0].name, "sensitive");
    assert!(definitions[1].default_value.is_none());
}

/// The parser never populates a variable reference's inferred type.
#[test]
fn parser_leaves_inferred_type_empty() {
    let document = parse_ok("{ f(id: $x) }");
    let field = field_at(&first_operation(&document).selection_set, 0);
    match &field.arguments[0].value {
        Value::Variable(reference) => assert!(reference.inferred_type.is_none()),
        value => panic!("expected a variable reference, got {value:?}"),
    }
}

// =============================================================================
// Fields
// =============================================================================

#[test]
fn aliased_field() {
    let document = parse_ok("{ profile: user { id } }");
    let field = field_at(&first_operation(&document).selection_set, 0);
    assert_eq!(field.alias.as_deref(), Some("profile"));
    assert_eq!(field.name, "user");
    assert_eq!(field.response_name(), "profile");
}

#[test]
fn field_with_arguments_and_directives() {
    let document = parse_ok("{ user(id: 4, active: true) @include(if: $flag) { id } }");
    let field = field_at(&first_operation(&document).selection_set, 0);
    assert_eq!(field.arguments.len(), 2);
    assert_eq!(field.arguments[1].value, Value::Boolean(true));
    assert_eq!(field.directives[0].name, "include");
    assert_eq!(field.selection_set.len(), 1);
}

#[test]
fn deeply_nested_selections() {
    let document = parse_ok("{ a { b { c { d } } } }");
    let a = field_at(&first_operation(&document).selection_set, 0);
    let b = field_at(&a.selection_set, 0);
    let c = field_at(&b.selection_set, 0);
    assert_eq!(field_at(&c.selection_set, 0).name, "d");
}

#[test]
fn empty_selection_set_is_rejected() {
    assert!(parse("{ }").is_err());
    assert!(parse("{ user { } }").is_err());
}

// =============================================================================
// Fragments
// =============================================================================

#[test]
fn fragment_definition() {
    let document = parse_ok("fragment UserParts on User @internal { id name }");
    let fragment = first_fragment(&document);
    assert_eq!(fragment.name, "UserParts");
    assert_eq!(fragment.type_condition, "User");
    assert_eq!(fragment.directives[0].name, "internal");
    assert_eq!(fragment.selection_set.len(), 2);
}

#[test]
fn fragment_inline_view() {
    let document = parse_ok("fragment F on User { id }");
    let inline = first_fragment(&document).inline();
    assert_eq!(inline.type_condition.as_deref(), Some("User"));
    assert_eq!(inline.selection_set.len(), 1);
}

#[test]
fn fragment_named_on_is_rejected() {
    assert!(parse("fragment on on User { id }").is_err());
}

#[test]
fn fragment_spread() {
    let document = parse_ok("{ ...UserParts @defer }");
    match &first_operation(&document).selection_set[0] {
        Selection::FragmentSpread(spread) => {
            assert_eq!(spread.name, "UserParts");
            assert_eq!(spread.directives[0].name, "defer");
        }
        selection => panic!("expected a fragment spread, got {selection:?}"),
    }
}

#[test]
fn inline_fragment_with_condition() {
    let document = parse_ok("{ ... on User { id } }");
    match &first_operation(&document).selection_set[0] {
        Selection::InlineFragment(inline) => {
            assert_eq!(inline.type_condition.as_deref(), Some("User"));
            assert_eq!(inline.selection_set.len(), 1);
        }
        selection => panic!("expected an inline fragment, got {selection:?}"),
    }
}

/// An inline fragment may drop the type condition and carry only
/// directives.
#[test]
fn inline_fragment_without_condition() {
    let document = parse_ok("{ ... @defer { id } }");
    match &first_operation(&document).selection_set[0] {
        Selection::InlineFragment(inline) => {
            assert!(inline.type_condition.is_none());
            assert_eq!(inline.directives[0].name, "defer");
        }
        selection => panic!("expected an inline fragment, got {selection:?}"),
    }
}

// =============================================================================
// Values
// =============================================================================

fn argument_value(source: &str) -> Value {
    let document = parse_ok(source);
    let field = field_at(&first_operation(&document).selection_set, 0);
    field.arguments[0].value.clone()
}

#[test]
fn scalar_values() {
    assert_eq!(argument_value("{ f(x: 42) }"), Value::Int(42.into()));
    assert_eq!(
        argument_value(r#"{ f(x: "hi") }"#),
        Value::String("hi".to_string()),
    );
    assert_eq!(argument_value("{ f(x: false) }"), Value::Boolean(false));
    assert_eq!(argument_value("{ f(x: null) }"), Value::Null);
    assert_eq!(
        argument_value("{ f(x: ACTIVE) }"),
        Value::Enum("ACTIVE".to_string()),
    );
}

#[test]
fn float_value_keeps_shape() {
    match argument_value("{ f(x: 1e6) }") {
        Value::Float(literal) => assert_eq!(literal.to_string(), "1e6"),
        value => panic!("expected a float, got {value:?}"),
    }
}

#[test]
fn list_and_object_values() {
    assert_eq!(
        argument_value("{ f(x: [1, 2, 3]) }"),
        Value::List(vec![
            Value::Int(1.into()),
            Value::Int(2.into()),
            Value::Int(3.into()),
        ]),
    );
    assert_eq!(
        argument_value(r#"{ f(x: {a: 1, b: "two"}) }"#),
        Value::Object(vec![
            ("a".to_string(), Value::Int(1.into())),
            ("b".to_string(), Value::String("two".to_string())),
        ]),
    );
    assert_eq!(argument_value("{ f(x: []) }"), Value::List(vec![]));
    assert_eq!(argument_value("{ f(x: {}) }"), Value::Object(vec![]));
}

/// Duplicate object keys survive parsing; rejecting them is validation's
/// job.
#[test]
fn object_values_permit_duplicate_keys() {
    match argument_value("{ f(x: {a: 1, a: 2}) }") {
        Value::Object(entries) => assert_eq!(entries.len(), 2),
        value => panic!("expected an object, got {value:?}"),
    }
}

#[test]
fn nested_values() {
    match argument_value("{ f(x: [{ids: [1, 2]}, {ids: []}]) }") {
        Value::List(items) => assert_eq!(items.len(), 2),
        value => panic!("expected a list, got {value:?}"),
    }
}

/// Numeric value equality tolerates float representation differences.
#[test]
fn numeric_value_equality() {
    assert_eq!(argument_value("{ f(x: 1.0) }"), argument_value("{ f(x: 1) }"));
    assert_eq!(
        argument_value("{ f(x: 1e2) }"),
        argument_value("{ f(x: 100.0) }"),
    );
    assert_ne!(argument_value("{ f(x: 1.5) }"), argument_value("{ f(x: 1) }"));
    assert_ne!(
        argument_value(r#"{ f(x: "1") }"#),
        argument_value("{ f(x: 1) }"),
    );
}

// =============================================================================
// Type annotations
// =============================================================================

#[test]
fn standalone_type_annotations() {
    assert_eq!(parse_type("User").unwrap(), TypeAnnotation::named("User"));
    assert_eq!(
        parse_type("User!").unwrap(),
        TypeAnnotation::named("User").non_null(),
    );
    assert_eq!(
        parse_type("[User]").unwrap(),
        TypeAnnotation::list_of(TypeAnnotation::named("User")),
    );
    assert_eq!(
        parse_type("[[User!]]!").unwrap(),
        TypeAnnotation::list_of(TypeAnnotation::list_of(
            TypeAnnotation::named("User").non_null(),
        ))
        .non_null(),
    );
}

#[test]
fn type_annotation_unpack() {
    assert_eq!(parse_type("[[User!]!]!").unwrap().unpack(), "User");
}

/// The standalone form requires the annotation to span the whole input.
#[test]
fn standalone_type_requires_eof() {
    assert!(parse_type("User extra").is_err());
    assert!(parse_type("").is_err());
}

/// Nesting past the configured bound fails fast instead of recursing
/// without limit.
#[test]
fn nesting_limit() {
    let mut source = String::new();
    for _ in 0..80 {
        source.push('[');
    }
    source.push_str("Int");
    for _ in 0..80 {
        source.push(']');
    }
    let tokens = crate::tokenize(&source).unwrap();
    let mut parser = crate::Parser::new(tokens);
    let error = parser.type_annotation().unwrap_err();
    assert!(matches!(error, ParseError::TooDeep { .. }));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn trailing_tokens_fail() {
    assert!(parse("{ id } }").is_err());
}

#[test]
fn unterminated_selection_fails() {
    assert!(parse("{ id").is_err());
}

#[test]
fn lex_errors_surface_through_parse() {
    assert!(parse("{ f(x: 01) }").is_err());
}
