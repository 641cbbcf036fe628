use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::Fragment;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Operation;
use crate::ast::Selection;
use crate::ast::VariableDefinition;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Read-only traversal state handed to every hook.
///
/// The ancestor path runs from the enclosing top-level definition down to
/// the current node's parent. Entries are clones taken as the walk
/// descends: under bottom-up traversal an ancestor looks the way it did
/// before its own hook ran, under top-down the way its hook left it.
///
/// The fragment table is a snapshot of the document's fragments taken when
/// [`Editor::edit`](crate::editor::Editor::edit) started, so a hook can
/// resolve spreads while the live tree is being rewritten. Fragments added
/// or removed mid-walk are not reflected.
#[derive(Debug)]
pub struct Context {
    path: SmallVec<[PathNode; 8]>,
    fragments: IndexMap<String, Fragment>,
}

impl Context {
    pub(super) fn snapshot(document: &Document) -> Self {
        let mut fragments = IndexMap::new();
        for definition in &document.definitions {
            if let Definition::Fragment(fragment) = definition {
                fragments
                    .entry(fragment.name.clone())
                    .or_insert_with(|| fragment.clone());
            }
        }
        Self {
            path: SmallVec::new(),
            fragments,
        }
    }

    pub(super) fn push(&mut self, node: PathNode) {
        self.path.push(node);
    }

    pub(super) fn pop(&mut self) {
        self.path.pop();
    }

    /// The ancestor chain from the enclosing top-level definition to the
    /// current node's parent.
    pub fn path(&self) -> &[PathNode] {
        &self.path
    }

    /// The current node's immediate parent.
    pub fn parent(&self) -> Option<&PathNode> {
        self.path.last()
    }

    /// The innermost enclosing top-level definition.
    ///
    /// `None` during a top-level definition's own hook, since the path only
    /// covers ancestors.
    pub fn definition(&self) -> Option<&PathNode> {
        self.path.first()
    }

    /// Looks up a fragment in the snapshot taken at edit entry.
    pub fn fragment(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }
}

/// One ancestor entry on the [`Context`] path.
#[derive(Clone, Debug)]
pub enum PathNode {
    Operation(Operation),
    Fragment(Fragment),
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
    Argument(Argument),
    Directive(Directive),
    VariableDefinition(VariableDefinition),
}

impl PathNode {
    pub(super) fn from_definition(definition: &Definition) -> Self {
        match definition {
            Definition::Operation(operation) => PathNode::Operation(operation.clone()),
            Definition::Fragment(fragment) => PathNode::Fragment(fragment.clone()),
        }
    }

    pub(super) fn from_selection(selection: &Selection) -> Self {
        match selection {
            Selection::Field(field) => PathNode::Field(field.clone()),
            Selection::FragmentSpread(spread) => PathNode::FragmentSpread(spread.clone()),
            Selection::InlineFragment(inline) => PathNode::InlineFragment(inline.clone()),
        }
    }

    pub fn as_operation(&self) -> Option<&Operation> {
        match self {
            PathNode::Operation(operation) => Some(operation),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&Fragment> {
        match self {
            PathNode::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            PathNode::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_inline_fragment(&self) -> Option<&InlineFragment> {
        match self {
            PathNode::InlineFragment(inline) => Some(inline),
            _ => None,
        }
    }
}
