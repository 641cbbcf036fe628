use serde::Deserialize;
use serde::Serialize;

/// The introspection kind of a schema type.
///
/// Serialized in the introspection spelling (`SCALAR`, `INPUT_OBJECT`, ...).
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    /// Kinds a selection set can be applied to.
    pub fn is_composite(&self) -> bool {
        matches!(self, TypeKind::Object | TypeKind::Interface | TypeKind::Union)
    }

    /// Kinds that terminate a selection (no sub-selection allowed).
    pub fn is_leaf(&self) -> bool {
        matches!(self, TypeKind::Scalar | TypeKind::Enum)
    }
}
