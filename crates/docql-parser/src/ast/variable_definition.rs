use crate::ast::Directive;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::print::Printer;
use crate::print::Render;
use inherent::inherent;

/// A `$name: Type = default @directive` declaration on an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub annotation: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
}

impl VariableDefinition {
    pub fn new(name: impl Into<String>, annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            annotation,
            default_value: None,
            directives: Vec::new(),
        }
    }
}

#[inherent]
impl Render for VariableDefinition {
    pub fn render(&self, out: &mut Printer) {
        out.push_str("$");
        out.push_str(&self.name);
        out.push_str(": ");
        out.push_str(&self.annotation.to_string());
        if let Some(default) = &self.default_value {
            out.push_str(" = ");
            default.render(out);
        }
        crate::print::render_directives(&self.directives, out);
    }
}
