//! The minimal type-system model the engine consults.
//!
//! A [`Schema`] is an ordered name→type registry plus the root type name for
//! each operation kind. It is a collaborator, not a parser: how a schema is
//! obtained (hand-built, deserialized from a stored registry) is the
//! caller's affair. The validator and the type annotator only ever look up
//! types by name and read kinds, fields, arguments, and defaults.

mod schema_type;
#[allow(clippy::module_inception)]
mod schema;
mod type_kind;

pub use schema::Schema;
pub use schema_type::SchemaArgument;
pub use schema_type::SchemaField;
pub use schema_type::SchemaType;
pub use type_kind::TypeKind;
