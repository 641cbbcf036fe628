use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::schema::TypeKind;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// One named type in a [`Schema`](crate::schema::Schema).
///
/// Output and input fields share the `fields` table; for an `INPUT_OBJECT`
/// type the entries are its input fields. List and non-null wrapping is
/// carried structurally on each field's [`TypeAnnotation`], so there is no
/// separate wrapper-type chain to walk.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SchemaType {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub fields: IndexMap<String, SchemaField>,
}

impl SchemaType {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: IndexMap::new(),
        }
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Scalar)
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Object)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    /// Adds a field declaration, replacing any previous one with the same
    /// name.
    pub fn with_field(mut self, name: impl Into<String>, field: SchemaField) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Looks up a field declaration by name.
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.get(name)
    }
}

/// A field declared on a [`SchemaType`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SchemaField {
    pub annotation: TypeAnnotation,
    #[serde(default)]
    pub arguments: IndexMap<String, SchemaArgument>,
}

impl SchemaField {
    pub fn new(annotation: TypeAnnotation) -> Self {
        Self {
            annotation,
            arguments: IndexMap::new(),
        }
    }

    /// Adds an argument declaration, replacing any previous one with the
    /// same name.
    pub fn with_argument(mut self, name: impl Into<String>, argument: SchemaArgument) -> Self {
        self.arguments.insert(name.into(), argument);
        self
    }
}

/// An argument declared on a [`SchemaField`].
///
/// A non-null argument without a `default_value` is required: validation
/// reports any field selection that omits it or passes `null`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SchemaArgument {
    pub annotation: TypeAnnotation,
    #[serde(default)]
    pub default_value: Option<Value>,
}

impl SchemaArgument {
    pub fn new(annotation: TypeAnnotation) -> Self {
        Self {
            annotation,
            default_value: None,
        }
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }
}
