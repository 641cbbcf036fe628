use crate::ast::Argument;
use crate::print::Printer;
use crate::print::Render;
use inherent::inherent;

/// An `@name(...)` directive annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }
}

#[inherent]
impl Render for Directive {
    pub fn render(&self, out: &mut Printer) {
        out.push_str("@");
        out.push_str(&self.name);
        if !self.arguments.is_empty() {
            out.push_str("(");
            crate::print::render_comma_separated(&self.arguments, out);
            out.push_str(")");
        }
    }
}
