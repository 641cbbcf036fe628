use crate::ast::Directive;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::VariableDefinition;
use crate::print::Printer;
use crate::print::Render;
use inherent::inherent;

/// A top-level operation definition.
///
/// Variable declarations are scoped to the operation that carries them; two
/// operations in one document have independent variable namespaces.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

impl Operation {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            name: None,
            variable_definitions: Vec::new(),
            directives: Vec::new(),
            selection_set: Vec::new(),
        }
    }

    /// The implicit form: an anonymous query written as a bare selection
    /// set. It renders without the `query` keyword.
    pub fn is_implicit_query(&self) -> bool {
        self.kind == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
    }

    /// Looks up a declared variable by name.
    pub fn variable_definition(&self, name: &str) -> Option<&VariableDefinition> {
        self.variable_definitions
            .iter()
            .find(|definition| definition.name == name)
    }
}

#[inherent]
impl Render for Operation {
    pub fn render(&self, out: &mut Printer) {
        if !self.is_implicit_query() {
            out.push_str(self.kind.keyword());
            if let Some(name) = &self.name {
                out.push_str(" ");
                out.push_str(name);
            }
            if !self.variable_definitions.is_empty() {
                out.push_str("(");
                crate::print::render_comma_separated(&self.variable_definitions, out);
                out.push_str(")");
            }
            crate::print::render_directives(&self.directives, out);
            out.push_str(" ");
        }
        crate::print::render_selection_block(&self.selection_set, out);
    }
}
