use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Operation;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::ast::VariableReference;
use crate::editor::Action;
use crate::editor::Context;
use crate::editor::Editor;
use crate::editor::Rewriter;
use crate::passes::InlineError;
use crate::passes::inline;
use indexmap::IndexMap;
use log::debug;
use std::convert::Infallible;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InferenceError {
    #[error("cannot infer a type for variable ${variable}")]
    CannotInfer { variable: String },

    #[error("variable ${variable} is used both as {first} and {second}")]
    TypeMismatch {
        variable: String,
        first: TypeAnnotation,
        second: TypeAnnotation,
    },

    #[error("operation {} is not defined", .name.as_deref().unwrap_or("(anonymous)"))]
    OperationNotFound { name: Option<String> },

    #[error(transparent)]
    Inline(#[from] InlineError),
}

/// Synthesizes the variable declarations one operation is missing.
///
/// For each variable the operation references without declaring, the type
/// comes from the first source that yields one:
///
/// 1. an explicit declaration already on the operation (nothing to do);
/// 2. the type recorded on a reference by the schema annotation pass;
/// 3. the dynamic type of the matching runtime value in `values`
///    (`Int` → `Int!`, `Float` → `Float!`, `String` → `String!`, booleans
///    → `Boolean!`, lists → a non-null list of the first element's type).
///
/// Two references that were annotated with incompatible types fail with
/// [`InferenceError::TypeMismatch`]; a variable no source can type fails
/// with [`InferenceError::CannotInfer`].
pub fn infer_variables(
    document: &mut Document,
    operation: Option<&str>,
    values: &IndexMap<String, Value>,
) -> Result<(), InferenceError> {
    let references = collect_references(document)?;
    let target = document
        .definitions
        .iter_mut()
        .find_map(|definition| match definition {
            Definition::Operation(candidate) if candidate.name.as_deref() == operation => {
                Some(candidate)
            }
            _ => None,
        })
        .ok_or_else(|| InferenceError::OperationNotFound {
            name: operation.map(str::to_string),
        })?;
    let references = references_for(&references, target.name.as_deref());
    infer_onto(target, references, Some(values), false)
}

/// Runs inference over every operation without runtime values.
///
/// The signature-inference mode of [`infer_variables`]: declarations are
/// synthesized wherever priorities 1–2 yield a type, and variables that
/// would need a runtime value are left undeclared instead of failing, to
/// be resolved once values are known.
pub fn infer_signatures(document: &mut Document) -> Result<(), InferenceError> {
    let references = collect_references(document)?;
    for definition in &mut document.definitions {
        let Definition::Operation(operation) = definition else {
            continue;
        };
        let operation_references = references_for(&references, operation.name.as_deref());
        infer_onto(operation, operation_references, None, true)?;
    }
    Ok(())
}

fn references_for<'a>(
    references: &'a [(Option<String>, Vec<VariableReference>)],
    operation: Option<&str>,
) -> &'a [VariableReference] {
    references
        .iter()
        .find(|(name, _)| name.as_deref() == operation)
        .map(|(_, list)| list.as_slice())
        .unwrap_or(&[])
}

fn infer_onto(
    operation: &mut Operation,
    references: &[VariableReference],
    values: Option<&IndexMap<String, Value>>,
    defer_unresolved: bool,
) -> Result<(), InferenceError> {
    let mut resolved: IndexMap<String, Option<TypeAnnotation>> = IndexMap::new();
    for reference in references {
        if operation.variable_definition(&reference.name).is_some() {
            continue;
        }
        let slot = resolved.entry(reference.name.clone()).or_insert(None);
        if let Some(annotation) = &reference.inferred_type {
            match slot {
                Some(existing) if existing != annotation => {
                    return Err(InferenceError::TypeMismatch {
                        variable: reference.name.clone(),
                        first: existing.clone(),
                        second: annotation.clone(),
                    });
                }
                Some(_) => {}
                None => *slot = Some(annotation.clone()),
            }
        }
    }

    let mut synthesized = 0;
    for (name, candidate) in resolved {
        let annotation = candidate.or_else(|| {
            values
                .and_then(|values| values.get(&name))
                .and_then(value_type)
        });
        match annotation {
            Some(annotation) => {
                operation
                    .variable_definitions
                    .push(VariableDefinition::new(name, annotation));
                synthesized += 1;
            }
            None if defer_unresolved => {}
            None => return Err(InferenceError::CannotInfer { variable: name }),
        }
    }
    if synthesized > 0 {
        debug!(
            "inferred {synthesized} variable definitions on operation {:?}",
            operation.name,
        );
    }
    Ok(())
}

/// The variable type implied by a runtime value, if any.
fn value_type(value: &Value) -> Option<TypeAnnotation> {
    match value {
        Value::Int(_) => Some(TypeAnnotation::named("Int").non_null()),
        Value::Float(_) => Some(TypeAnnotation::named("Float").non_null()),
        Value::String(_) => Some(TypeAnnotation::named("String").non_null()),
        Value::Boolean(_) => Some(TypeAnnotation::named("Boolean").non_null()),
        Value::List(items) => items
            .first()
            .and_then(value_type)
            .map(|element| TypeAnnotation::list_of(element).non_null()),
        _ => None,
    }
}

/// Per-operation variable references, gathered from an inlined working copy
/// so spreads cannot hide usages. References keep whatever `inferred_type`
/// the annotation pass left on them.
fn collect_references(
    document: &Document,
) -> Result<Vec<(Option<String>, Vec<VariableReference>)>, InlineError> {
    let inlined = inline(document.clone())?;
    let mut collector = ReferenceCollector {
        references: Vec::new(),
    };
    match Editor::top_down().edit(inlined, &mut collector) {
        Ok(_) => {}
        Err(never) => match never {},
    }
    Ok(collector.references)
}

struct ReferenceCollector {
    references: Vec<(Option<String>, Vec<VariableReference>)>,
}

impl Rewriter for ReferenceCollector {
    type Error = Infallible;

    fn operation(
        &mut self,
        operation: &mut Operation,
        _action: &mut Action<Definition>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        self.references.push((operation.name.clone(), Vec::new()));
        Ok(())
    }

    fn value(
        &mut self,
        value: &mut Value,
        _action: &mut Action<Value>,
        _context: &Context,
    ) -> Result<(), Infallible> {
        if let Value::Variable(reference) = value
            && let Some((_, list)) = self.references.last_mut()
        {
            list.push(reference.clone());
        }
        Ok(())
    }
}
