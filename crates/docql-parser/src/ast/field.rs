use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Selection;
use crate::ast::TypeAnnotation;
use crate::print::Printer;
use crate::print::Render;
use inherent::inherent;

/// A field selection, optionally aliased, with arguments, directives, and a
/// nested selection set.
///
/// `resolved_type` is populated only by the schema annotation pass and is
/// never rendered as syntax.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
    pub resolved_type: Option<TypeAnnotation>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            name: name.into(),
            arguments: Vec::new(),
            directives: Vec::new(),
            selection_set: Vec::new(),
            resolved_type: None,
        }
    }

    /// A bare field: no alias, arguments, directives, or sub-selection.
    ///
    /// Bare fields are what the compact one-line selection rendering packs
    /// together.
    pub fn is_simple(&self) -> bool {
        self.alias.is_none()
            && self.arguments.is_empty()
            && self.directives.is_empty()
            && self.selection_set.is_empty()
    }

    /// The name this field responds to in a result object.
    pub fn response_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[inherent]
impl Render for Field {
    pub fn render(&self, out: &mut Printer) {
        if let Some(alias) = &self.alias {
            out.push_str(alias);
            out.push_str(": ");
        }
        out.push_str(&self.name);
        if !self.arguments.is_empty() {
            out.push_str("(");
            crate::print::render_comma_separated(&self.arguments, out);
            out.push_str(")");
        }
        crate::print::render_directives(&self.directives, out);
        if !self.selection_set.is_empty() {
            out.push_str(" ");
            crate::print::render_selection_set(&self.selection_set, out);
        }
    }
}
