use crate::ast::Directive;
use crate::ast::Selection;
use crate::print::Printer;
use crate::print::Render;
use inherent::inherent;

/// An anonymous inline selection, optionally restricted to a type condition:
/// `... on Type { }` or `... @directive { }`.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

#[inherent]
impl Render for InlineFragment {
    pub fn render(&self, out: &mut Printer) {
        out.push_str("...");
        if let Some(condition) = &self.type_condition {
            out.push_str(" on ");
            out.push_str(condition);
        }
        crate::print::render_directives(&self.directives, out);
        out.push_str(" ");
        crate::print::render_selection_set(&self.selection_set, out);
    }
}
