use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Operation;
use crate::ast::Value;
use crate::editor::Action;
use crate::editor::Context;
use crate::editor::Editor;
use crate::editor::Rewriter;
use crate::passes::InlineError;
use crate::passes::inline;
use indexmap::IndexSet;
use std::convert::Infallible;

/// The distinct variable names one operation references, in first-use
/// order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableUsage {
    /// The operation's name; `None` for an anonymous operation.
    pub operation: Option<String>,
    pub variables: IndexSet<String>,
}

/// Records, per operation, the distinct variable names it references.
///
/// Fragments are inlined first (on a working copy) so references hidden
/// behind spreads are attributed to the operations that use them. Usages
/// are returned in document order.
pub fn collect_variables(document: &Document) -> Result<Vec<VariableUsage>, InlineError> {
    let inlined = inline(document.clone())?;
    let mut collector = Collector { usages: Vec::new() };
    match Editor::top_down().edit(inlined, &mut collector) {
        Ok(_) => {}
        Err(never) => match never {},
    }
    Ok(collector.usages)
}

struct Collector {
    usages: Vec<VariableUsage>,
}

impl Rewriter for Collector {
    type Error = Infallible;

    fn operation(
        &mut self,
        operation: &mut Operation,
        _action: &mut Action<Definition>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        self.usages.push(VariableUsage {
            operation: operation.name.clone(),
            variables: IndexSet::new(),
        });
        Ok(())
    }

    fn value(
        &mut self,
        value: &mut Value,
        _action: &mut Action<Value>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        if let Value::Variable(reference) = value
            && let Some(usage) = self.usages.last_mut()
        {
            usage.variables.insert(reference.name.clone());
        }
        Ok(())
    }
}
