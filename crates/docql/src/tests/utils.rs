//! Shared helpers for core-crate tests.

use crate::ast::Document;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::parser::NumericLiteral;
use crate::schema::Schema;
use crate::schema::SchemaArgument;
use crate::schema::SchemaField;
use crate::schema::SchemaType;
use crate::schema::TypeKind;

/// Parses `source`, panicking with the error on failure.
pub fn parse_ok(source: &str) -> Document {
    crate::parse(source).unwrap_or_else(|error| panic!("parse failed: {error}\nsource: {source}"))
}

/// An integer literal value.
pub fn int(value: i64) -> Value {
    Value::Int(NumericLiteral::from(value))
}

/// The schema most tests validate and annotate against.
///
/// ```graphql
/// type Query {
///   user(id: ID!): User
///   users: [User!]!
///   version: String
///   search(filter: UserFilter, limit: Int = 10): [User]
/// }
/// type User {
///   id: ID!
///   name: String
///   age: Int
///   active: Boolean
///   friends: [User]
///   avatar(size: Int): String
/// }
/// type Mutation { createUser(name: String!): User }
/// interface Node { id: ID! }
/// input UserFilter { name: String, age: Int }
/// ```
pub fn test_schema() -> Schema {
    let mut schema = Schema::new();
    schema.declare(
        SchemaType::object("Query")
            .with_field(
                "user",
                SchemaField::new(TypeAnnotation::named("User")).with_argument(
                    "id",
                    SchemaArgument::new(TypeAnnotation::named("ID").non_null()),
                ),
            )
            .with_field(
                "users",
                SchemaField::new(
                    TypeAnnotation::list_of(TypeAnnotation::named("User").non_null()).non_null(),
                ),
            )
            .with_field("version", SchemaField::new(TypeAnnotation::named("String")))
            .with_field(
                "search",
                SchemaField::new(TypeAnnotation::list_of(TypeAnnotation::named("User")))
                    .with_argument(
                        "filter",
                        SchemaArgument::new(TypeAnnotation::named("UserFilter")),
                    )
                    .with_argument(
                        "limit",
                        SchemaArgument::new(TypeAnnotation::named("Int").non_null())
                            .with_default(int(10)),
                    ),
            ),
    );
    schema.declare(
        SchemaType::object("User")
            .with_field(
                "id",
                SchemaField::new(TypeAnnotation::named("ID").non_null()),
            )
            .with_field("name", SchemaField::new(TypeAnnotation::named("String")))
            .with_field("age", SchemaField::new(TypeAnnotation::named("Int")))
            .with_field("active", SchemaField::new(TypeAnnotation::named("Boolean")))
            .with_field(
                "friends",
                SchemaField::new(TypeAnnotation::list_of(TypeAnnotation::named("User"))),
            )
            .with_field(
                "avatar",
                SchemaField::new(TypeAnnotation::named("String"))
                    .with_argument("size", SchemaArgument::new(TypeAnnotation::named("Int"))),
            ),
    );
    schema.declare(
        SchemaType::object("Mutation").with_field(
            "createUser",
            SchemaField::new(TypeAnnotation::named("User")).with_argument(
                "name",
                SchemaArgument::new(TypeAnnotation::named("String").non_null()),
            ),
        ),
    );
    schema.declare(
        SchemaType::interface("Node").with_field(
            "id",
            SchemaField::new(TypeAnnotation::named("ID").non_null()),
        ),
    );
    schema.declare(
        SchemaType::new("UserFilter", TypeKind::InputObject)
            .with_field("name", SchemaField::new(TypeAnnotation::named("String")))
            .with_field("age", SchemaField::new(TypeAnnotation::named("Int"))),
    );
    schema
}
