use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Selection;
use indexmap::IndexMap;
use indexmap::IndexSet;
use log::debug;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SelectError {
    #[error("operation {name} is not defined")]
    OperationNotFound { name: String },
}

/// Reduces a document to one named operation plus every fragment it
/// transitively depends on.
///
/// Dependencies are computed from a per-definition adjacency list of
/// directly spread fragment names, closed over fragment-to-fragment edges
/// with a worklist. Definitions keep their document order; unrelated
/// operations and fragments are dropped.
pub fn select_operation(mut document: Document, name: &str) -> Result<Document, SelectError> {
    let Some(operation) = document.operation(Some(name)) else {
        return Err(SelectError::OperationNotFound {
            name: name.to_string(),
        });
    };

    let mut adjacency: IndexMap<&str, IndexSet<String>> = IndexMap::new();
    for definition in &document.definitions {
        if let Definition::Fragment(fragment) = definition {
            adjacency
                .entry(fragment.name.as_str())
                .or_insert_with(|| spread_targets(&fragment.selection_set));
        }
    }

    let mut needed = spread_targets(&operation.selection_set);
    let mut worklist: Vec<String> = needed.iter().cloned().collect();
    while let Some(current) = worklist.pop() {
        if let Some(edges) = adjacency.get(current.as_str()) {
            for edge in edges {
                if needed.insert(edge.clone()) {
                    worklist.push(edge.clone());
                }
            }
        }
    }

    document.definitions.retain(|definition| match definition {
        Definition::Operation(operation) => operation.name.as_deref() == Some(name),
        Definition::Fragment(fragment) => needed.contains(&fragment.name),
    });
    debug!(
        "selected operation {name} with {} fragments",
        needed.len(),
    );
    Ok(document)
}

/// The names of every fragment directly spread anywhere under
/// `selection_set`, in first-spread order.
pub(crate) fn spread_targets(selection_set: &[Selection]) -> IndexSet<String> {
    let mut targets = IndexSet::new();
    collect_targets(selection_set, &mut targets);
    targets
}

fn collect_targets(selection_set: &[Selection], targets: &mut IndexSet<String>) {
    for selection in selection_set {
        match selection {
            Selection::Field(field) => collect_targets(&field.selection_set, targets),
            Selection::FragmentSpread(spread) => {
                targets.insert(spread.name.clone());
            }
            Selection::InlineFragment(inline) => collect_targets(&inline.selection_set, targets),
        }
    }
}
