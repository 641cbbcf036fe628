//! Schema-driven semantic validation.
//!
//! Validation is two-phase. A top-down editor traversal first surveys the
//! document, collecting every operation, fragment, spread, inline fragment,
//! and field (each field with the schema type it is selected on). Batch
//! rules then run over the survey, appending one plain-text message per
//! violation, and the whole set is raised at once as a single
//! [`InvalidDocument`] — a user sees every problem in one report instead of
//! one at a time.
//!
//! Message wordings are a contract: callers key off substrings like
//! `"argument id on field user is required"`.

mod invalid_document;
mod rules;
mod survey;

pub use invalid_document::InvalidDocument;

use crate::ast::Document;
use crate::schema::Schema;
use log::debug;
use survey::Survey;

/// Validates documents against one schema.
pub struct Validator<'s> {
    schema: &'s Schema,
}

impl<'s> Validator<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    /// Checks every rule against `document`, collecting all violations
    /// before failing.
    pub fn validate(&self, document: &Document) -> Result<(), InvalidDocument> {
        let survey = Survey::collect(document, self.schema);
        let mut errors = Vec::new();
        rules::operations::check(&survey, &mut errors);
        rules::fragments::check(&survey, self.schema, &mut errors);
        rules::fields::check(&survey, self.schema, &mut errors);
        rules::values::check(&survey, self.schema, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            debug!("validation found {} errors", errors.len());
            Err(InvalidDocument { errors })
        }
    }
}
