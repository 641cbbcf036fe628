use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Fragment;
use crate::ast::FragmentSpread;
use crate::ast::Selection;
use crate::editor::Action;
use crate::editor::Context;
use crate::editor::Editor;
use crate::editor::Rewriter;
use log::debug;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InlineError {
    #[error("fragment {name} is not defined")]
    FragmentNotFound { name: String },
}

/// Replaces every fragment spread with the spread fragment's selection,
/// spliced in place.
///
/// Nested spreads inside an expanded selection are expanded in the same
/// walk, so one edit fully inlines transitive fragment chains. The fragment
/// definitions themselves are left in place; run [`FragmentStripper`] (or
/// use [`inline`]) to drop them afterwards.
///
/// Cyclic spread chains must be rejected by validation first; inlining a
/// cycle does not terminate.
#[derive(Debug, Default)]
pub struct FragmentInliner;

impl Rewriter for FragmentInliner {
    type Error = InlineError;

    fn fragment_spread(
        &mut self,
        spread: &mut FragmentSpread,
        action: &mut Action<Selection>,
        context: &Context,
    ) -> Result<(), InlineError> {
        let fragment = context
            .fragment(&spread.name)
            .ok_or_else(|| InlineError::FragmentNotFound {
                name: spread.name.clone(),
            })?;
        action.expand(fragment.inline().selection_set);
        Ok(())
    }
}

/// Deletes every top-level fragment definition.
///
/// The companion to [`FragmentInliner`]: once spreads are expanded the
/// definitions are dead weight in a document meant to be self-contained.
#[derive(Debug, Default)]
pub struct FragmentStripper;

impl Rewriter for FragmentStripper {
    // Never fails; the error type matches the inliner so the two compose.
    type Error = InlineError;

    fn fragment(
        &mut self,
        _fragment: &mut Fragment,
        action: &mut Action<Definition>,
        _context: &Context,
    ) -> Result<(), InlineError> {
        action.delete();
        Ok(())
    }
}

/// Expands every fragment spread and drops the fragment definitions,
/// leaving a self-contained document.
///
/// Inlining a document with no spreads is a no-op, and the pass is
/// idempotent: applying it twice equals applying it once.
pub fn inline(document: Document) -> Result<Document, InlineError> {
    let fragment_count = document
        .definitions
        .iter()
        .filter(|definition| definition.is_fragment())
        .count();
    let document = Editor::new().edit(document, &mut FragmentInliner)?;
    let document = Editor::new().edit(document, &mut FragmentStripper)?;
    debug!("inlined and stripped {fragment_count} fragments");
    Ok(document)
}
