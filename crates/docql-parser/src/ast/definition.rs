use crate::ast::Fragment;
use crate::ast::Operation;
use crate::print::Printer;
use crate::print::Render;
use inherent::inherent;

/// A top-level definition of a document.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(Operation),
    Fragment(Fragment),
}

impl Definition {
    /// The definition's name, if it has one. Anonymous operations have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Definition::Operation(operation) => operation.name.as_deref(),
            Definition::Fragment(fragment) => Some(&fragment.name),
        }
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self, Definition::Fragment(_))
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            Definition::Operation(operation) => Some(operation),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&Fragment> {
        match self {
            Definition::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }
}

#[inherent]
impl Render for Definition {
    pub fn render(&self, out: &mut Printer) {
        match self {
            Definition::Operation(operation) => operation.render(out),
            Definition::Fragment(fragment) => fragment.render(out),
        }
    }
}
