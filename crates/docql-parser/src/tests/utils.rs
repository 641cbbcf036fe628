//! Shared helpers for parser-crate tests.

use crate::ast::Document;
use crate::ast::Field;
use crate::ast::Fragment;
use crate::ast::Operation;
use crate::ast::Selection;

/// Parses `source`, panicking with the error on failure.
pub fn parse_ok(source: &str) -> Document {
    crate::parse(source).unwrap_or_else(|error| panic!("parse failed: {error}\nsource: {source}"))
}

/// The first operation definition of `document`.
pub fn first_operation(document: &Document) -> &Operation {
    document
        .definitions
        .iter()
        .find_map(|definition| definition.as_operation())
        .expect("document has an operation")
}

/// The first fragment definition of `document`.
pub fn first_fragment(document: &Document) -> &Fragment {
    document
        .definitions
        .iter()
        .find_map(|definition| definition.as_fragment())
        .expect("document has a fragment")
}

/// The nth selection of `selection_set` as a field.
pub fn field_at(selection_set: &[Selection], index: usize) -> &Field {
    selection_set[index]
        .as_field()
        .expect("selection is a field")
}
