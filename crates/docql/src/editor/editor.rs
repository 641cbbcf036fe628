use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Selection;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::editor::Action;
use crate::editor::Context;
use crate::editor::PathNode;
use crate::editor::Rewriter;
use crate::editor::action::Outcome;
use log::debug;
use log::trace;
use smallvec::SmallVec;
use std::mem;

/// The order in which hooks fire relative to child recursion.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Traversal {
    /// Children first, then the node's own hook. The hook sees its subtree
    /// already rewritten.
    #[default]
    BottomUp,

    /// The node's own hook first, then recursion into whatever the hook
    /// left behind.
    TopDown,
}

/// Drives a [`Rewriter`] over a document in a chosen [`Traversal`] order.
///
/// An editor is reusable: it holds no per-document state, so one instance
/// can edit any number of documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct Editor {
    traversal: Traversal,
}

impl Editor {
    /// A bottom-up editor, the default order.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bottom_up() -> Self {
        Self {
            traversal: Traversal::BottomUp,
        }
    }

    pub fn top_down() -> Self {
        Self {
            traversal: Traversal::TopDown,
        }
    }

    /// Runs `rewriter` over every definition of `document` and returns the
    /// rewritten document.
    ///
    /// The document's definition list is replaced by the flattened result
    /// of the walk: a deleted definition disappears, an expanded one
    /// contributes each of its expansion nodes.
    pub fn edit<R: Rewriter>(
        &self,
        document: Document,
        rewriter: &mut R,
    ) -> Result<Document, R::Error> {
        debug!(
            "editing document: {} definitions, {:?} traversal",
            document.definitions.len(),
            self.traversal,
        );
        let mut walk = Walk {
            traversal: self.traversal,
            rewriter,
            context: Context::snapshot(&document),
        };
        let mut definitions = Vec::with_capacity(document.definitions.len());
        for definition in document.definitions {
            definitions.extend(walk.edit_definition(definition)?);
        }
        debug!("edit produced {} definitions", definitions.len());
        Ok(Document::new(definitions))
    }
}

/// One in-flight walk: the rewriter plus the traversal state hooks observe.
struct Walk<'r, R: Rewriter> {
    traversal: Traversal,
    rewriter: &'r mut R,
    context: Context,
}

impl<R: Rewriter> Walk<'_, R> {
    // =========================================================================
    // The generic edit frame
    // =========================================================================

    /// Edits one node, returning the sequence that takes its place in the
    /// parent's list. `hook` dispatches to the rewriter; `children` recurses
    /// into the node's own lists with the node pushed onto the path.
    fn edit_node<T>(
        &mut self,
        node: T,
        hook: fn(&mut Self, &mut T, &mut Action<T>) -> Result<(), R::Error>,
        children: fn(&mut Self, &mut T) -> Result<(), R::Error>,
    ) -> Result<SmallVec<[T; 1]>, R::Error> {
        match self.traversal {
            Traversal::BottomUp => self.edit_bottom_up(node, hook, children),
            Traversal::TopDown => self.edit_top_down(node, hook, children),
        }
    }

    fn edit_bottom_up<T>(
        &mut self,
        mut node: T,
        hook: fn(&mut Self, &mut T, &mut Action<T>) -> Result<(), R::Error>,
        children: fn(&mut Self, &mut T) -> Result<(), R::Error>,
    ) -> Result<SmallVec<[T; 1]>, R::Error> {
        children(self, &mut node)?;
        let mut action = Action::new();
        hook(self, &mut node, &mut action)?;
        let (before, outcome, after) = action.into_parts();
        let mut out = before;
        match outcome {
            None => out.push(node),
            Some(Outcome::Replace(replacement)) => out.push(replacement),
            Some(Outcome::Delete) => {}
            Some(Outcome::Expand(nodes)) => {
                // Expanded nodes get the full bottom-up treatment so that
                // expansion producing further expandable nodes converges
                // in one pass.
                for expanded in nodes {
                    out.extend(self.edit_bottom_up(expanded, hook, children)?);
                }
            }
        }
        out.extend(after);
        Ok(out)
    }

    fn edit_top_down<T>(
        &mut self,
        mut node: T,
        hook: fn(&mut Self, &mut T, &mut Action<T>) -> Result<(), R::Error>,
        children: fn(&mut Self, &mut T) -> Result<(), R::Error>,
    ) -> Result<SmallVec<[T; 1]>, R::Error> {
        let mut action = Action::new();
        hook(self, &mut node, &mut action)?;
        let (before, outcome, after) = action.into_parts();
        let mut out: SmallVec<[T; 1]> = SmallVec::new();
        for mut inserted in before {
            children(self, &mut inserted)?;
            out.push(inserted);
        }
        match outcome {
            None => {
                children(self, &mut node)?;
                out.push(node);
            }
            Some(Outcome::Replace(mut replacement)) => {
                children(self, &mut replacement)?;
                out.push(replacement);
            }
            Some(Outcome::Delete) => {}
            Some(Outcome::Expand(nodes)) => {
                for expanded in nodes {
                    out.extend(self.edit_top_down(expanded, hook, children)?);
                }
            }
        }
        for mut inserted in after {
            children(self, &mut inserted)?;
            out.push(inserted);
        }
        Ok(out)
    }

    fn edit_list<T>(
        &mut self,
        items: Vec<T>,
        hook: fn(&mut Self, &mut T, &mut Action<T>) -> Result<(), R::Error>,
        children: fn(&mut Self, &mut T) -> Result<(), R::Error>,
    ) -> Result<Vec<T>, R::Error> {
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.extend(self.edit_node(item, hook, children)?);
        }
        Ok(out)
    }

    /// Runs `children` with `node`'s path entry pushed, popping it again on
    /// every exit path.
    fn descend<T>(
        &mut self,
        entry: PathNode,
        node: &mut T,
        children: impl FnOnce(&mut Self, &mut T) -> Result<(), R::Error>,
    ) -> Result<(), R::Error> {
        self.context.push(entry);
        let result = children(self, node);
        self.context.pop();
        result
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn edit_definition(&mut self, definition: Definition) -> Result<SmallVec<[Definition; 1]>, R::Error> {
        self.edit_node(definition, Self::definition_hook, Self::definition_children)
    }

    fn definition_hook(
        &mut self,
        node: &mut Definition,
        action: &mut Action<Definition>,
    ) -> Result<(), R::Error> {
        trace!("definition hook: {:?}", node.name());
        match node {
            Definition::Operation(operation) => {
                self.rewriter.operation(operation, action, &self.context)
            }
            Definition::Fragment(fragment) => {
                self.rewriter.fragment(fragment, action, &self.context)
            }
        }
    }

    fn definition_children(&mut self, node: &mut Definition) -> Result<(), R::Error> {
        let entry = PathNode::from_definition(node);
        self.descend(entry, node, |walk, node| match node {
            Definition::Operation(operation) => {
                operation.variable_definitions = walk.edit_list(
                    mem::take(&mut operation.variable_definitions),
                    Self::variable_definition_hook,
                    Self::variable_definition_children,
                )?;
                operation.directives = walk.edit_directives(mem::take(&mut operation.directives))?;
                operation.selection_set =
                    walk.edit_selections(mem::take(&mut operation.selection_set))?;
                Ok(())
            }
            Definition::Fragment(fragment) => {
                fragment.directives = walk.edit_directives(mem::take(&mut fragment.directives))?;
                fragment.selection_set =
                    walk.edit_selections(mem::take(&mut fragment.selection_set))?;
                Ok(())
            }
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn edit_selections(&mut self, items: Vec<Selection>) -> Result<Vec<Selection>, R::Error> {
        self.edit_list(items, Self::selection_hook, Self::selection_children)
    }

    fn selection_hook(
        &mut self,
        node: &mut Selection,
        action: &mut Action<Selection>,
    ) -> Result<(), R::Error> {
        match node {
            Selection::Field(field) => {
                trace!("field hook: {}", field.name);
                self.rewriter.field(field, action, &self.context)
            }
            Selection::FragmentSpread(spread) => {
                trace!("fragment spread hook: {}", spread.name);
                self.rewriter.fragment_spread(spread, action, &self.context)
            }
            Selection::InlineFragment(inline) => {
                trace!("inline fragment hook: {:?}", inline.type_condition);
                self.rewriter.inline_fragment(inline, action, &self.context)
            }
        }
    }

    fn selection_children(&mut self, node: &mut Selection) -> Result<(), R::Error> {
        let entry = PathNode::from_selection(node);
        self.descend(entry, node, |walk, node| match node {
            Selection::Field(field) => {
                field.arguments = walk.edit_arguments(mem::take(&mut field.arguments))?;
                field.directives = walk.edit_directives(mem::take(&mut field.directives))?;
                field.selection_set = walk.edit_selections(mem::take(&mut field.selection_set))?;
                Ok(())
            }
            Selection::FragmentSpread(spread) => {
                spread.directives = walk.edit_directives(mem::take(&mut spread.directives))?;
                Ok(())
            }
            Selection::InlineFragment(inline) => {
                inline.directives = walk.edit_directives(mem::take(&mut inline.directives))?;
                inline.selection_set =
                    walk.edit_selections(mem::take(&mut inline.selection_set))?;
                Ok(())
            }
        })
    }

    // =========================================================================
    // Arguments, directives, variable definitions
    // =========================================================================

    fn edit_arguments(&mut self, items: Vec<Argument>) -> Result<Vec<Argument>, R::Error> {
        self.edit_list(items, Self::argument_hook, Self::argument_children)
    }

    fn argument_hook(
        &mut self,
        node: &mut Argument,
        action: &mut Action<Argument>,
    ) -> Result<(), R::Error> {
        self.rewriter.argument(node, action, &self.context)
    }

    fn argument_children(&mut self, node: &mut Argument) -> Result<(), R::Error> {
        let entry = PathNode::Argument(node.clone());
        self.descend(entry, node, |walk, node| walk.edit_value_slot(&mut node.value))
    }

    fn edit_directives(&mut self, items: Vec<Directive>) -> Result<Vec<Directive>, R::Error> {
        self.edit_list(items, Self::directive_hook, Self::directive_children)
    }

    fn directive_hook(
        &mut self,
        node: &mut Directive,
        action: &mut Action<Directive>,
    ) -> Result<(), R::Error> {
        self.rewriter.directive(node, action, &self.context)
    }

    fn directive_children(&mut self, node: &mut Directive) -> Result<(), R::Error> {
        let entry = PathNode::Directive(node.clone());
        self.descend(entry, node, |walk, node| {
            node.arguments = walk.edit_arguments(mem::take(&mut node.arguments))?;
            Ok(())
        })
    }

    fn variable_definition_hook(
        &mut self,
        node: &mut VariableDefinition,
        action: &mut Action<VariableDefinition>,
    ) -> Result<(), R::Error> {
        self.rewriter.variable_definition(node, action, &self.context)
    }

    fn variable_definition_children(&mut self, node: &mut VariableDefinition) -> Result<(), R::Error> {
        let entry = PathNode::VariableDefinition(node.clone());
        self.descend(entry, node, |walk, node| {
            node.directives = walk.edit_directives(mem::take(&mut node.directives))?;
            if let Some(default) = &mut node.default_value {
                walk.edit_value_slot(default)?;
            }
            Ok(())
        })
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn value_hook(
        &mut self,
        node: &mut Value,
        action: &mut Action<Value>,
    ) -> Result<(), R::Error> {
        self.rewriter.value(node, action, &self.context)
    }

    fn value_children(&mut self, node: &mut Value) -> Result<(), R::Error> {
        match node {
            Value::List(items) => {
                *items = self.edit_list(
                    mem::take(items),
                    Self::value_hook,
                    Self::value_children,
                )?;
                Ok(())
            }
            Value::Object(entries) => {
                for (_, value) in entries.iter_mut() {
                    self.edit_value_slot(value)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Edits a value in a single-slot position, where only replacement can
    /// apply.
    fn edit_value_slot(&mut self, value: &mut Value) -> Result<(), R::Error> {
        match self.traversal {
            Traversal::BottomUp => {
                self.value_children(value)?;
                let mut action = Action::new();
                self.value_hook(value, &mut action)?;
                if let Some(replacement) = action.into_slot_replacement() {
                    *value = replacement;
                }
            }
            Traversal::TopDown => {
                let mut action = Action::new();
                self.value_hook(value, &mut action)?;
                if let Some(replacement) = action.into_slot_replacement() {
                    *value = replacement;
                }
                self.value_children(value)?;
            }
        }
        Ok(())
    }
}
