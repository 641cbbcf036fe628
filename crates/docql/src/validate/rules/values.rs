use crate::ast::Value;
use crate::schema::Schema;
use crate::schema::TypeKind;
use crate::validate::survey::Survey;

/// Value rules: a literal argument's syntactic kind must match the scalar
/// its argument is declared with.
///
/// `ID` accepts an integer or a string; `Int`, `String`, and `Boolean`
/// each require their own kind; any other scalar matches when the
/// literal's kind name equals the type name. Variables and `null` are not
/// kind-checked (a `null` against a required argument is the
/// required-argument rule's concern), and list-typed arguments are left
/// alone.
pub(in crate::validate) fn check(survey: &Survey, schema: &Schema, errors: &mut Vec<String>) {
    for record in &survey.fields {
        let field = &record.field;
        let Some(parent_name) = &record.parent_type else {
            continue;
        };
        let Some(declared) = schema.field(parent_name, &field.name) else {
            continue;
        };
        for argument in &field.arguments {
            let Some(schema_argument) = declared.arguments.get(&argument.name) else {
                continue;
            };
            if schema_argument.annotation.is_list() {
                continue;
            }
            let scalar_name = schema_argument.annotation.unpack();
            let is_scalar = schema
                .type_named(scalar_name)
                .is_some_and(|type_| type_.kind == TypeKind::Scalar);
            if !is_scalar {
                continue;
            }
            if matches!(argument.value, Value::Variable(_) | Value::Null) {
                continue;
            }
            let matches_kind = match scalar_name {
                "ID" => matches!(argument.value, Value::Int(_) | Value::String(_)),
                "Int" => matches!(argument.value, Value::Int(_)),
                "String" => matches!(argument.value, Value::String(_)),
                "Boolean" => matches!(argument.value, Value::Boolean(_)),
                other => argument.value.scalar_kind_name() == Some(other),
            };
            if !matches_kind {
                errors.push(format!(
                    "invalid value for argument {} on field {}: expected {scalar_name}",
                    argument.name, field.name,
                ));
            }
        }
    }
}
