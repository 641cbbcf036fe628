use crate::ast::TypeAnnotation;
use crate::print::Printer;
use crate::print::Render;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A `$name` reference to a variable.
///
/// `inferred_type` is populated only by the annotation and inference passes,
/// never by the parser, and is never rendered as syntax.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VariableReference {
    pub name: String,
    pub inferred_type: Option<TypeAnnotation>,
}

impl VariableReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inferred_type: None,
        }
    }
}

#[inherent]
impl Render for VariableReference {
    pub fn render(&self, out: &mut Printer) {
        out.push_str("$");
        out.push_str(&self.name);
    }
}
