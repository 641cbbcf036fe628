use crate::ast::OperationKind;
use crate::schema::SchemaField;
use crate::schema::SchemaType;
use crate::schema::TypeKind;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// Names of the scalars every schema starts with.
const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// The type-system description consulted by the annotator and validator.
///
/// An ordered name→type registry plus the root type name for each operation
/// kind. [`Schema::new`] pre-seeds the built-in scalars, so a hand-built
/// schema only declares its own types.
///
/// # Example
///
/// ```rust
/// use docql::ast::TypeAnnotation;
/// use docql::schema::{Schema, SchemaField, SchemaType};
///
/// let mut schema = Schema::new();
/// schema.declare(
///     SchemaType::object("Query")
///         .with_field("version", SchemaField::new(TypeAnnotation::named("String"))),
/// );
/// assert_eq!(schema.type_named("Query").unwrap().fields.len(), 1);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Schema {
    pub query_root: String,
    pub mutation_root: String,
    pub subscription_root: String,
    pub types: IndexMap<String, SchemaType>,
}

impl Schema {
    pub fn new() -> Self {
        let mut types = IndexMap::new();
        for name in BUILTIN_SCALARS {
            types.insert(name.to_string(), SchemaType::new(name, TypeKind::Scalar));
        }
        Self {
            query_root: "Query".to_string(),
            mutation_root: "Mutation".to_string(),
            subscription_root: "Subscription".to_string(),
            types,
        }
    }

    /// Registers a type under its own name, replacing any previous one.
    pub fn declare(&mut self, type_: SchemaType) -> &mut Self {
        self.types.insert(type_.name.clone(), type_);
        self
    }

    /// Looks up a type by name.
    pub fn type_named(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    /// The root type name for an operation kind.
    pub fn root(&self, kind: OperationKind) -> &str {
        match kind {
            OperationKind::Query => &self.query_root,
            OperationKind::Mutation => &self.mutation_root,
            OperationKind::Subscription => &self.subscription_root,
        }
    }

    /// Looks up a field declaration on a named type.
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&SchemaField> {
        self.type_named(type_name)?.field(field_name)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}
