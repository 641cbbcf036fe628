use crate::ast::Directive;
use crate::print::Printer;
use crate::print::Render;
use inherent::inherent;

/// A `...name` reference to a named fragment.
///
/// Spreads are non-owning: the target fragment is looked up by name in the
/// enclosing document's fragment view at edit or validation time.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Vec<Directive>,
}

impl FragmentSpread {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directives: Vec::new(),
        }
    }
}

#[inherent]
impl Render for FragmentSpread {
    pub fn render(&self, out: &mut Printer) {
        out.push_str("...");
        out.push_str(&self.name);
        crate::print::render_directives(&self.directives, out);
    }
}
