//! Tests for the schema-driven validator: the rule catalog, message
//! wording, and the all-errors-in-one-report contract.

use crate::ast::TypeAnnotation;
use crate::schema::Schema;
use crate::schema::SchemaArgument;
use crate::schema::SchemaField;
use crate::schema::SchemaType;
use crate::tests::utils::parse_ok;
use crate::tests::utils::test_schema;
use crate::validate::InvalidDocument;
use crate::validate::Validator;

fn validate(source: &str) -> Result<(), InvalidDocument> {
    let schema = test_schema();
    Validator::new(&schema).validate(&parse_ok(source))
}

fn errors_of(source: &str) -> InvalidDocument {
    validate(source).expect_err("expected validation errors")
}

#[test]
fn a_valid_document_passes() {
    validate(
        "query Q { user(id: \"1\") { id name friends { id } } }\n\n\
         mutation M { createUser(name: \"Ada\") { id } }",
    )
    .unwrap();
}

// =============================================================================
// Operations
// =============================================================================

#[test]
fn duplicate_operation_names() {
    let errors = errors_of("query Q { version }\n\nquery Q { version }");
    assert!(errors.mentions("ambiguous operation name Q"));
}

#[test]
fn anonymous_operation_must_be_alone() {
    let errors = errors_of("{ version }\n\nquery Q { version }");
    assert!(errors.mentions("anonymous operation must be alone in a document"));
}

#[test]
fn a_lone_anonymous_operation_is_fine() {
    validate("{ version }").unwrap();
}

// =============================================================================
// Fragments
// =============================================================================

#[test]
fn duplicate_fragment_names() {
    let errors = errors_of(
        "{ user(id: \"1\") { ...dup } }\n\n\
         fragment dup on User { id }\n\n\
         fragment dup on User { name }",
    );
    assert!(errors.mentions("ambiguous fragment name dup"));
}

#[test]
fn unused_fragment_is_reported() {
    let errors = errors_of(
        "{ version }\n\nfragment Lonely on User { id }",
    );
    assert!(errors.mentions("fragment Lonely must be used in an operation"));
}

/// A fragment reached only through another fragment still counts as used.
#[test]
fn transitively_used_fragment_is_not_reported() {
    validate(
        "{ user(id: \"1\") { ...Outer } }\n\n\
         fragment Outer on User { id ...Inner }\n\n\
         fragment Inner on User { name }",
    )
    .unwrap();
}

#[test]
fn spread_of_an_undefined_fragment() {
    let errors = errors_of("{ user(id: \"1\") { ...Ghost } }");
    assert!(errors.mentions("fragment Ghost is not defined"));
}

#[test]
fn type_condition_must_exist() {
    let errors = errors_of(
        "{ user(id: \"1\") { ...F } }\n\nfragment F on Ghost { id }",
    );
    assert!(errors.mentions("... target Ghost is not defined"));
}

/// A type condition naming a scalar cannot carry a selection.
#[test]
fn type_condition_must_be_composite() {
    let errors = errors_of(
        "{ user(id: \"1\") { ...F } }\n\nfragment F on String { id }",
    );
    assert!(errors.mentions(
        "... target String must be kind of UNION, INTERFACE, or OBJECT",
    ));
}

#[test]
fn inline_fragment_conditions_are_checked_too() {
    let errors = errors_of("{ user(id: \"1\") { ... on Boolean { id } } }");
    assert!(errors.mentions(
        "... target Boolean must be kind of UNION, INTERFACE, or OBJECT",
    ));
}

/// An interface type condition is accepted.
#[test]
fn interface_type_condition_is_composite() {
    validate(
        "{ user(id: \"1\") { ...F } }\n\nfragment F on Node { id }",
    )
    .unwrap();
}

// =============================================================================
// Cycles
// =============================================================================

/// A three-fragment cycle yields exactly one circular-reference error.
#[test]
fn cycle_reported_exactly_once() {
    let errors = errors_of(
        "{ user(id: \"1\") { ...A } }\n\n\
         fragment A on User { ...B }\n\n\
         fragment B on User { ...C }\n\n\
         fragment C on User { ...A }",
    );
    let circular: Vec<&String> = errors
        .errors
        .iter()
        .filter(|error| error.contains("circular reference"))
        .collect();
    assert_eq!(circular, vec!["circular reference on fragment A"]);
}

#[test]
fn self_spread_is_a_cycle() {
    let errors = errors_of(
        "{ user(id: \"1\") { ...A } }\n\nfragment A on User { ...A }",
    );
    assert!(errors.mentions("circular reference on fragment A"));
}

/// A diamond (two paths to one fragment) is not a cycle.
#[test]
fn acyclic_spread_graph_reports_nothing_circular() {
    let result = validate(
        "{ user(id: \"1\") { ...Left ...Right } }\n\n\
         fragment Left on User { ...Shared }\n\n\
         fragment Right on User { ...Shared }\n\n\
         fragment Shared on User { id }",
    );
    if let Err(errors) = result {
        assert!(!errors.mentions("circular reference"), "{errors}");
    }
}

// =============================================================================
// Fields
// =============================================================================

#[test]
fn unknown_field_is_reported_with_its_type() {
    let errors = errors_of("{ user(id: \"1\") { shoe_size } }");
    assert!(errors.mentions("field shoe_size is not defined on User"));
}

#[test]
fn composite_fields_need_a_selection() {
    let errors = errors_of("{ user(id: \"1\") }");
    assert!(errors.mentions("selection on field user can't be empty"));
}

#[test]
fn leaf_fields_forbid_a_selection() {
    let errors = errors_of("{ version { length } }");
    assert!(errors.mentions("selection on field version must be empty"));
}

#[test]
fn duplicate_arguments_are_ambiguous() {
    let errors = errors_of("{ user(id: \"1\", id: \"2\") { id } }");
    assert!(errors.mentions("ambiguous argument id on field user"));
}

#[test]
fn required_argument_must_be_present() {
    let errors = errors_of("{ user { id } }");
    assert!(errors.mentions("argument id on field user is required"));
}

#[test]
fn required_argument_rejects_null() {
    let errors = errors_of("{ user(id: null) { id } }");
    assert!(errors.mentions("argument id on field user is required"));
}

/// A non-null argument with a schema default is not required.
#[test]
fn defaulted_arguments_are_optional() {
    validate("{ search { id } }").unwrap();
}

/// `User(id: 123)` against `User(id: ID!): User` satisfies the required
/// argument, but the missing selection is still reported.
#[test]
fn selection_required_even_when_arguments_are_satisfied() {
    let mut schema = Schema::new();
    schema.declare(SchemaType::object("Query").with_field(
        "User",
        SchemaField::new(TypeAnnotation::named("User")).with_argument(
            "id",
            SchemaArgument::new(TypeAnnotation::named("ID").non_null()),
        ),
    ));
    schema.declare(SchemaType::object("User").with_field(
        "id",
        SchemaField::new(TypeAnnotation::named("ID").non_null()),
    ));
    let errors = Validator::new(&schema)
        .validate(&parse_ok("{ User(id: 123) }"))
        .expect_err("expected validation errors");
    assert!(errors.mentions("selection on field User can't be empty"));
    assert!(!errors.mentions("argument id on field User is required"));
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn id_accepts_integers_and_strings() {
    validate("{ user(id: 1) { id } }").unwrap();
    validate("{ user(id: \"1\") { id } }").unwrap();
}

#[test]
fn id_rejects_booleans() {
    let errors = errors_of("{ user(id: true) { id } }");
    assert!(errors.mentions("invalid value for argument id on field user: expected ID"));
}

#[test]
fn int_requires_an_integer() {
    let errors = errors_of("{ user(id: \"1\") { avatar(size: \"big\") } }");
    assert!(errors.mentions(
        "invalid value for argument size on field avatar: expected Int",
    ));
}

/// Variables are not kind-checked; their types are the inference passes'
/// concern.
#[test]
fn variables_are_not_kind_checked() {
    validate("query Q($s: Int) { user(id: \"1\") { avatar(size: $s) } }").unwrap();
}

// =============================================================================
// Aggregation
// =============================================================================

/// Every violation lands in one report.
#[test]
fn all_errors_are_collected_before_raising() {
    let errors = errors_of(
        "{ user { shoe_size } }\n\nfragment Lonely on User { id }",
    );
    assert!(errors.mentions("argument id on field user is required"));
    assert!(errors.mentions("field shoe_size is not defined on User"));
    assert!(errors.mentions("fragment Lonely must be used in an operation"));
    assert!(errors.errors.len() >= 3);
}

/// The report displays one message per line.
#[test]
fn report_displays_one_message_per_line() {
    let errors = errors_of("{ user { shoe_size } }");
    let display = errors.to_string();
    assert_eq!(display.lines().count(), errors.errors.len());
}
