use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::Fragment;
use crate::ast::InlineFragment;
use crate::ast::Operation;
use crate::ast::Selection;
use crate::ast::VariableDefinition;
use crate::editor::Action;
use crate::editor::Context;
use crate::editor::Editor;
use crate::editor::Rewriter;
use crate::passes::InlineError;
use crate::passes::inline;
use std::convert::Infallible;

/// Normalizes a document for structural comparison.
///
/// Fragments are inlined and stripped, the remaining top-level definitions
/// are sorted by name (anonymous operations first), and every argument and
/// directive list is sorted by name. Two documents that differ only in
/// definition, argument, or directive order canonicalize to equal trees;
/// no selection merging is attempted.
pub fn canonicalize(document: Document) -> Result<Document, InlineError> {
    let document = inline(document)?;
    let mut document = match Editor::new().edit(document, &mut CanonicalOrder) {
        Ok(document) => document,
        Err(never) => match never {},
    };
    document
        .definitions
        .sort_by(|a, b| a.name().cmp(&b.name()));
    Ok(document)
}

/// Sorts argument and directive lists in place, everywhere they occur.
struct CanonicalOrder;

fn sort_directives(directives: &mut [Directive]) {
    directives.sort_by(|a, b| a.name.cmp(&b.name));
}

impl Rewriter for CanonicalOrder {
    type Error = Infallible;

    fn operation(
        &mut self,
        operation: &mut Operation,
        _action: &mut Action<Definition>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        sort_directives(&mut operation.directives);
        Ok(())
    }

    fn fragment(
        &mut self,
        fragment: &mut Fragment,
        _action: &mut Action<Definition>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        sort_directives(&mut fragment.directives);
        Ok(())
    }

    fn field(
        &mut self,
        field: &mut Field,
        _action: &mut Action<Selection>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        field.arguments.sort_by(|a, b| a.name.cmp(&b.name));
        sort_directives(&mut field.directives);
        Ok(())
    }

    fn inline_fragment(
        &mut self,
        inline: &mut InlineFragment,
        _action: &mut Action<Selection>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        sort_directives(&mut inline.directives);
        Ok(())
    }

    fn directive(
        &mut self,
        directive: &mut Directive,
        _action: &mut Action<Directive>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        directive.arguments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(())
    }

    fn variable_definition(
        &mut self,
        definition: &mut VariableDefinition,
        _action: &mut Action<VariableDefinition>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        sort_directives(&mut definition.directives);
        Ok(())
    }
}
