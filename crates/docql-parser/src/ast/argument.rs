use crate::ast::Value;
use crate::print::Printer;
use crate::print::Render;
use inherent::inherent;

/// A named argument on a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[inherent]
impl Render for Argument {
    pub fn render(&self, out: &mut Printer) {
        out.push_str(&self.name);
        out.push_str(": ");
        self.value.render(out);
    }
}
