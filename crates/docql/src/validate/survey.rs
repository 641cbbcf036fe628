use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::Fragment;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Operation;
use crate::ast::Selection;
use crate::editor::Action;
use crate::editor::Context;
use crate::editor::Editor;
use crate::editor::PathNode;
use crate::editor::Rewriter;
use crate::passes::spread_targets;
use crate::schema::Schema;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::convert::Infallible;

/// Everything one traversal of the document collects for the batch rules.
pub(super) struct Survey {
    /// Operations in document order.
    pub operations: Vec<Operation>,

    /// Fragment definitions in document order, duplicates included.
    pub fragments: Vec<Fragment>,

    /// Every spread site in the document.
    pub spreads: Vec<FragmentSpread>,

    /// Every inline fragment in the document.
    pub inline_fragments: Vec<InlineFragment>,

    /// Every field, with the schema type it is selected on.
    pub fields: Vec<FieldRecord>,

    /// Fragment names directly spread by any operation.
    pub operation_spreads: IndexSet<String>,

    /// Fragment name → fragment names it directly spreads. The first
    /// definition wins when a name is duplicated.
    pub fragment_spreads: IndexMap<String, IndexSet<String>>,
}

/// A surveyed field selection.
pub(super) struct FieldRecord {
    pub field: Field,

    /// The name of the schema type this field is selected on, or `None`
    /// when an ancestor already failed to resolve (that ancestor's own
    /// error covers the subtree).
    pub parent_type: Option<String>,
}

impl Survey {
    pub fn collect(document: &Document, schema: &Schema) -> Self {
        let mut surveyor = Surveyor {
            schema,
            survey: Survey {
                operations: Vec::new(),
                fragments: Vec::new(),
                spreads: Vec::new(),
                inline_fragments: Vec::new(),
                fields: Vec::new(),
                operation_spreads: IndexSet::new(),
                fragment_spreads: IndexMap::new(),
            },
        };
        match Editor::top_down().edit(document.clone(), &mut surveyor) {
            Ok(_) => {}
            Err(never) => match never {},
        }
        surveyor.survey
    }
}

struct Surveyor<'s> {
    schema: &'s Schema,
    survey: Survey,
}

impl Rewriter for Surveyor<'_> {
    type Error = Infallible;

    fn operation(
        &mut self,
        operation: &mut Operation,
        _action: &mut Action<Definition>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        self.survey
            .operation_spreads
            .extend(spread_targets(&operation.selection_set));
        self.survey.operations.push(operation.clone());
        Ok(())
    }

    fn fragment(
        &mut self,
        fragment: &mut Fragment,
        _action: &mut Action<Definition>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        self.survey
            .fragment_spreads
            .entry(fragment.name.clone())
            .or_insert_with(|| spread_targets(&fragment.selection_set));
        self.survey.fragments.push(fragment.clone());
        Ok(())
    }

    fn fragment_spread(
        &mut self,
        spread: &mut FragmentSpread,
        _action: &mut Action<Selection>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        self.survey.spreads.push(spread.clone());
        Ok(())
    }

    fn inline_fragment(
        &mut self,
        inline: &mut InlineFragment,
        _action: &mut Action<Selection>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        self.survey.inline_fragments.push(inline.clone());
        Ok(())
    }

    fn field(
        &mut self,
        field: &mut Field,
        _action: &mut Action<Selection>,
        context: &Context,
    ) -> Result<(), Infallible> {
        self.survey.fields.push(FieldRecord {
            parent_type: resolve_parent_type(context.path(), self.schema),
            field: field.clone(),
        });
        Ok(())
    }
}

/// Resolves the schema type a field at the end of `path` is selected on by
/// replaying the ancestor chain from the root: the operation kind picks the
/// root type, type conditions re-anchor it, and each ancestor field steps
/// through its declared type. Any failed lookup resolves the rest of the
/// chain to `None`.
fn resolve_parent_type(path: &[PathNode], schema: &Schema) -> Option<String> {
    let mut current: Option<String> = None;
    for node in path {
        match node {
            PathNode::Operation(operation) => {
                current = Some(schema.root(operation.kind).to_string());
            }
            PathNode::Fragment(fragment) => {
                current = Some(fragment.type_condition.clone());
            }
            PathNode::InlineFragment(inline) => {
                if let Some(condition) = &inline.type_condition {
                    current = Some(condition.clone());
                }
            }
            PathNode::Field(field) => {
                current = current
                    .as_deref()
                    .and_then(|parent| schema.field(parent, &field.name))
                    .map(|declared| declared.annotation.unpack().to_string());
            }
            _ => {}
        }
    }
    current
}
