use crate::ast::Value;
use crate::schema::Schema;
use crate::validate::survey::Survey;
use indexmap::IndexSet;

/// Field rules: the field exists on the type it is selected on, its
/// selection set agrees with the declared type's kind, argument names are
/// unambiguous, and required arguments are supplied.
pub(in crate::validate) fn check(survey: &Survey, schema: &Schema, errors: &mut Vec<String>) {
    for record in &survey.fields {
        let field = &record.field;
        let Some(parent_name) = &record.parent_type else {
            continue;
        };
        let Some(parent_type) = schema.type_named(parent_name) else {
            continue;
        };
        let Some(declared) = parent_type.field(&field.name) else {
            errors.push(format!(
                "field {} is not defined on {parent_name}",
                field.name,
            ));
            continue;
        };

        if let Some(field_type) = schema.type_named(declared.annotation.unpack()) {
            if field_type.kind.is_leaf() && !field.selection_set.is_empty() {
                errors.push(format!("selection on field {} must be empty", field.name));
            }
            if field_type.kind.is_composite() && field.selection_set.is_empty() {
                errors.push(format!("selection on field {} can't be empty", field.name));
            }
        }

        let mut seen = IndexSet::new();
        let mut ambiguous = IndexSet::new();
        for argument in &field.arguments {
            if !seen.insert(argument.name.as_str()) && ambiguous.insert(argument.name.as_str()) {
                errors.push(format!(
                    "ambiguous argument {} on field {}",
                    argument.name, field.name,
                ));
            }
        }

        for (name, schema_argument) in &declared.arguments {
            let required = schema_argument.annotation.is_non_null()
                && schema_argument.default_value.is_none();
            if !required {
                continue;
            }
            let supplied = field
                .arguments
                .iter()
                .find(|argument| &argument.name == name);
            let satisfied = supplied.is_some_and(|argument| !matches!(argument.value, Value::Null));
            if !satisfied {
                errors.push(format!(
                    "argument {name} on field {} is required",
                    field.name,
                ));
            }
        }
    }
}
