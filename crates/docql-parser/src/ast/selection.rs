use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::print::Printer;
use crate::print::Render;
use inherent::inherent;

/// One item of a selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    /// The field behind this selection, if it is one.
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Selection::Field(field) => Some(field),
            _ => None,
        }
    }
}

#[inherent]
impl Render for Selection {
    pub fn render(&self, out: &mut Printer) {
        match self {
            Selection::Field(field) => field.render(out),
            Selection::FragmentSpread(spread) => spread.render(out),
            Selection::InlineFragment(inline) => inline.render(out),
        }
    }
}
