use crate::ast::Directive;
use crate::ast::InlineFragment;
use crate::ast::Selection;
use crate::print::Printer;
use crate::print::Render;
use inherent::inherent;

/// A top-level named fragment definition.
///
/// Fragment names may not be `on` (the parser rejects that form) and must be
/// unique within a document, though uniqueness is a validation rule rather
/// than a construction invariant.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

impl Fragment {
    pub fn new(name: impl Into<String>, type_condition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_condition: type_condition.into(),
            directives: Vec::new(),
            selection_set: Vec::new(),
        }
    }

    /// The inline-fragment view of this definition, used when a spread of it
    /// is expanded in place.
    pub fn inline(&self) -> InlineFragment {
        InlineFragment {
            type_condition: Some(self.type_condition.clone()),
            directives: self.directives.clone(),
            selection_set: self.selection_set.clone(),
        }
    }
}

#[inherent]
impl Render for Fragment {
    pub fn render(&self, out: &mut Printer) {
        out.push_str("fragment ");
        out.push_str(&self.name);
        out.push_str(" on ");
        out.push_str(&self.type_condition);
        crate::print::render_directives(&self.directives, out);
        out.push_str(" ");
        crate::print::render_selection_block(&self.selection_set, out);
    }
}
