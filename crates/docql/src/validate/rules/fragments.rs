use crate::schema::Schema;
use crate::validate::survey::Survey;
use indexmap::IndexSet;

/// Fragment rules: unique names, every fragment reachable from an
/// operation, defined spread targets, composite type conditions, and no
/// spread cycles.
pub(in crate::validate) fn check(survey: &Survey, schema: &Schema, errors: &mut Vec<String>) {
    let mut defined = IndexSet::new();
    let mut duplicated = IndexSet::new();
    for fragment in &survey.fragments {
        if !defined.insert(fragment.name.as_str()) && duplicated.insert(fragment.name.as_str()) {
            errors.push(format!("ambiguous fragment name {}", fragment.name));
        }
    }

    let mut missing = IndexSet::new();
    for spread in &survey.spreads {
        if !defined.contains(spread.name.as_str()) && missing.insert(spread.name.as_str()) {
            errors.push(format!("fragment {} is not defined", spread.name));
        }
    }

    check_reachability(survey, errors);

    for fragment in &survey.fragments {
        check_type_condition(&fragment.type_condition, schema, errors);
    }
    for inline in &survey.inline_fragments {
        if let Some(condition) = &inline.type_condition {
            check_type_condition(condition, schema, errors);
        }
    }

    check_cycles(survey, errors);
}

/// A fragment's type condition must name a schema type selections can
/// apply to.
fn check_type_condition(condition: &str, schema: &Schema, errors: &mut Vec<String>) {
    match schema.type_named(condition) {
        None => errors.push(format!("... target {condition} is not defined")),
        Some(type_) if !type_.kind.is_composite() => {
            errors.push(format!(
                "... target {condition} must be kind of UNION, INTERFACE, or OBJECT",
            ));
        }
        Some(_) => {}
    }
}

/// Every fragment must be spread, directly or transitively, by some
/// operation.
fn check_reachability(survey: &Survey, errors: &mut Vec<String>) {
    let mut reachable = survey.operation_spreads.clone();
    let mut worklist: Vec<String> = reachable.iter().cloned().collect();
    while let Some(current) = worklist.pop() {
        if let Some(edges) = survey.fragment_spreads.get(&current) {
            for edge in edges {
                if reachable.insert(edge.clone()) {
                    worklist.push(edge.clone());
                }
            }
        }
    }

    let mut reported = IndexSet::new();
    for fragment in &survey.fragments {
        if !reachable.contains(&fragment.name) && reported.insert(fragment.name.as_str()) {
            errors.push(format!(
                "fragment {} must be used in an operation",
                fragment.name,
            ));
        }
    }
}

/// Spread chains must not cycle. Each fragment not yet swept starts a
/// depth-first walk with a per-chain stack; the first name seen twice on
/// one chain is reported, once per walk, so a cycle yields exactly one
/// error no matter how many fragments sit on it.
fn check_cycles(survey: &Survey, errors: &mut Vec<String>) {
    let mut swept: IndexSet<String> = IndexSet::new();
    for fragment in &survey.fragments {
        if swept.contains(&fragment.name) {
            continue;
        }
        let mut chain = IndexSet::new();
        if let Some(cycle) = find_cycle(&fragment.name, survey, &mut chain, &mut swept) {
            errors.push(format!("circular reference on fragment {cycle}"));
        }
    }
}

fn find_cycle(
    name: &str,
    survey: &Survey,
    chain: &mut IndexSet<String>,
    swept: &mut IndexSet<String>,
) -> Option<String> {
    if chain.contains(name) {
        return Some(name.to_string());
    }
    swept.insert(name.to_string());
    let edges = survey.fragment_spreads.get(name)?;
    chain.insert(name.to_string());
    let mut found = None;
    for edge in edges {
        found = find_cycle(edge, survey, chain, swept);
        if found.is_some() {
            break;
        }
    }
    chain.shift_remove(name);
    found
}
