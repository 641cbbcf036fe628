use serde::Deserialize;
use serde::Serialize;

/// A reference to a schema type, with list and non-null wrapping.
///
/// Wrapping nests structurally: `[User!]!` is a non-null list of non-null
/// `User`. [`TypeAnnotation::unpack`] reaches through every wrapper to the
/// innermost named type.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TypeAnnotation {
    Named {
        name: String,
        non_null: bool,
    },
    List {
        of_type: Box<TypeAnnotation>,
        non_null: bool,
    },
}

impl TypeAnnotation {
    /// A nullable named type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeAnnotation::Named {
            name: name.into(),
            non_null: false,
        }
    }

    /// A nullable list wrapping `of_type`.
    pub fn list_of(of_type: TypeAnnotation) -> Self {
        TypeAnnotation::List {
            of_type: Box::new(of_type),
            non_null: false,
        }
    }

    /// This annotation with its outermost wrapper marked non-null.
    pub fn non_null(self) -> Self {
        match self {
            TypeAnnotation::Named { name, .. } => TypeAnnotation::Named {
                name,
                non_null: true,
            },
            TypeAnnotation::List { of_type, .. } => TypeAnnotation::List {
                of_type,
                non_null: true,
            },
        }
    }

    pub fn is_non_null(&self) -> bool {
        match self {
            TypeAnnotation::Named { non_null, .. } => *non_null,
            TypeAnnotation::List { non_null, .. } => *non_null,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeAnnotation::List { .. })
    }

    /// The innermost named type.
    pub fn unpack(&self) -> &str {
        match self {
            TypeAnnotation::Named { name, .. } => name,
            TypeAnnotation::List { of_type, .. } => of_type.unpack(),
        }
    }
}

impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::Named { name, non_null } => {
                write!(f, "{name}")?;
                if *non_null {
                    write!(f, "!")?;
                }
            }
            TypeAnnotation::List { of_type, non_null } => {
                write!(f, "[{of_type}]")?;
                if *non_null {
                    write!(f, "!")?;
                }
            }
        }
        Ok(())
    }
}
