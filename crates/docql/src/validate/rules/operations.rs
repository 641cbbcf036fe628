use crate::validate::survey::Survey;
use indexmap::IndexSet;

/// No two named operations share a name, and an anonymous operation must
/// be the document's only definition of either kind.
pub(in crate::validate) fn check(survey: &Survey, errors: &mut Vec<String>) {
    let mut seen = IndexSet::new();
    let mut reported = IndexSet::new();
    for operation in &survey.operations {
        let Some(name) = &operation.name else {
            continue;
        };
        if !seen.insert(name.as_str()) && reported.insert(name.as_str()) {
            errors.push(format!("ambiguous operation name {name}"));
        }
    }

    let anonymous = survey
        .operations
        .iter()
        .filter(|operation| operation.name.is_none())
        .count();
    if anonymous > 0 && survey.operations.len() > 1 {
        errors.push("anonymous operation must be alone in a document".to_string());
    }
}
