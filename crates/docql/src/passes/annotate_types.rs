use crate::ast::Document;
use crate::ast::Field;
use crate::ast::Selection;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::editor::Action;
use crate::editor::Context;
use crate::editor::Editor;
use crate::editor::PathNode;
use crate::editor::Rewriter;
use crate::schema::Schema;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeCheckError {
    #[error("type {name} is not defined in the schema")]
    TypeNotFound { name: String },

    #[error("field {field} is not defined on {type_name}")]
    FieldNotFound { type_name: String, field: String },

    #[error("argument {argument} is not declared on field {field}")]
    ArgumentNotFound { field: String, argument: String },
}

/// Resolves every field against a schema and records its declared type on
/// the node.
///
/// Must run top-down ([`annotate`] does): a field's enclosing type comes
/// from the nearest annotated ancestor field, falling back to the type
/// condition of an enclosing fragment or inline fragment, and finally to
/// the operation kind's root type. Each variable reference inside a field's
/// arguments also picks up the type the schema declares for its position.
#[derive(Debug)]
pub struct TypeAnnotator<'s> {
    schema: &'s Schema,
}

impl<'s> TypeAnnotator<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// The schema type the current field is selected on, per the ancestor
    /// path. `None` only when there is no enclosing scope at all.
    fn enclosing_type(&self, context: &Context) -> Option<String> {
        for node in context.path().iter().rev() {
            match node {
                PathNode::Field(field) => {
                    return field
                        .resolved_type
                        .as_ref()
                        .map(|annotation| annotation.unpack().to_string());
                }
                PathNode::InlineFragment(inline) => {
                    // A conditionless inline fragment keeps the enclosing
                    // type.
                    if let Some(condition) = &inline.type_condition {
                        return Some(condition.clone());
                    }
                }
                PathNode::Fragment(fragment) => {
                    return Some(fragment.type_condition.clone());
                }
                PathNode::Operation(operation) => {
                    return Some(self.schema.root(operation.kind).to_string());
                }
                _ => {}
            }
        }
        None
    }
}

impl Rewriter for TypeAnnotator<'_> {
    type Error = TypeCheckError;

    fn field(
        &mut self,
        field: &mut Field,
        _action: &mut Action<Selection>,
        context: &Context,
    ) -> Result<(), TypeCheckError> {
        let Some(parent_name) = self.enclosing_type(context) else {
            return Ok(());
        };
        let parent_type =
            self.schema
                .type_named(&parent_name)
                .ok_or_else(|| TypeCheckError::TypeNotFound {
                    name: parent_name.clone(),
                })?;
        let declared =
            parent_type
                .field(&field.name)
                .ok_or_else(|| TypeCheckError::FieldNotFound {
                    type_name: parent_name.clone(),
                    field: field.name.clone(),
                })?;
        field.resolved_type = Some(declared.annotation.clone());

        for argument in &mut field.arguments {
            match declared.arguments.get(&argument.name) {
                Some(schema_argument) => {
                    annotate_value(&mut argument.value, &schema_argument.annotation, self.schema);
                }
                None if holds_variable(&argument.value) => {
                    return Err(TypeCheckError::ArgumentNotFound {
                        field: field.name.clone(),
                        argument: argument.name.clone(),
                    });
                }
                None => {}
            }
        }
        Ok(())
    }
}

/// Records the expected type on every variable reference inside `value`.
///
/// List elements expect the list's element type; input-object entries
/// expect the matching input field's type when the schema knows it.
fn annotate_value(value: &mut Value, expected: &TypeAnnotation, schema: &Schema) {
    match value {
        Value::Variable(reference) => {
            reference.inferred_type = Some(expected.clone());
        }
        Value::List(items) => {
            let element = match expected {
                TypeAnnotation::List { of_type, .. } => of_type,
                _ => expected,
            };
            for item in items {
                annotate_value(item, element, schema);
            }
        }
        Value::Object(entries) => {
            if let Some(input_type) = schema.type_named(expected.unpack()) {
                for (name, entry) in entries {
                    if let Some(input_field) = input_type.field(name) {
                        annotate_value(entry, &input_field.annotation, schema);
                    }
                }
            }
        }
        _ => {}
    }
}

/// Whether any variable reference appears inside `value`.
fn holds_variable(value: &Value) -> bool {
    match value {
        Value::Variable(_) => true,
        Value::List(items) => items.iter().any(holds_variable),
        Value::Object(entries) => entries.iter().any(|(_, entry)| holds_variable(entry)),
        _ => false,
    }
}

/// Runs the annotator top-down over `document`.
pub fn annotate(document: Document, schema: &Schema) -> Result<Document, TypeCheckError> {
    Editor::top_down().edit(document, &mut TypeAnnotator::new(schema))
}
