use crate::ast::Definition;
use crate::ast::Fragment;
use crate::ast::Operation;
use crate::print::Printer;
use crate::print::Render;
use indexmap::IndexMap;
use inherent::inherent;

/// A parsed document: an ordered list of operation and fragment definitions.
///
/// The name→definition views ([`Document::fragments`] and
/// [`Document::operations`]) are recomputed on demand from `definitions`,
/// never cached, so they stay correct across in-place edits. When two
/// fragments share a name (a validation error), the view keeps the first;
/// duplicate detection walks `definitions` directly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// Name→fragment view over `definitions`, in document order.
    pub fn fragments(&self) -> IndexMap<&str, &Fragment> {
        let mut fragments = IndexMap::new();
        for definition in &self.definitions {
            if let Definition::Fragment(fragment) = definition {
                fragments.entry(fragment.name.as_str()).or_insert(fragment);
            }
        }
        fragments
    }

    /// Name→operation view over `definitions`, in document order. Anonymous
    /// operations appear under `None`.
    pub fn operations(&self) -> IndexMap<Option<&str>, &Operation> {
        let mut operations = IndexMap::new();
        for definition in &self.definitions {
            if let Definition::Operation(operation) = definition {
                operations
                    .entry(operation.name.as_deref())
                    .or_insert(operation);
            }
        }
        operations
    }

    /// Looks up a fragment definition by name.
    pub fn fragment(&self, name: &str) -> Option<&Fragment> {
        self.definitions.iter().find_map(|definition| {
            definition
                .as_fragment()
                .filter(|fragment| fragment.name == name)
        })
    }

    /// Looks up an operation by name; `None` finds the first anonymous one.
    pub fn operation(&self, name: Option<&str>) -> Option<&Operation> {
        self.definitions.iter().find_map(|definition| {
            definition
                .as_operation()
                .filter(|operation| operation.name.as_deref() == name)
        })
    }

    /// Renders the document to its canonical text form.
    pub fn to_source(&self) -> String {
        let mut out = Printer::new();
        self.render(&mut out);
        out.finish()
    }
}

#[inherent]
impl Render for Document {
    pub fn render(&self, out: &mut Printer) {
        for (i, definition) in self.definitions.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n");
            }
            definition.render(out);
        }
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_source())
    }
}
