use std::collections::BTreeMap;

use serde::Serialize;

/// Raw name/value pairs as entered by the visitor, before validation.
pub type FormValues = BTreeMap<String, String>;

/// Validated flat key/value data handed to the submit collaborator.
///
/// Only [`ValidationSchema::validate`](super::ValidationSchema::validate) builds one, so holding a
/// payload means every rule passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionPayload {
    fields: BTreeMap<String, String>,
}

impl SubmissionPayload {
    pub(crate) fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    MissingRequiredField,
    InvalidEmailFormat,
}

impl FieldErrorKind {
    pub const fn label(self) -> &'static str {
        match self {
            FieldErrorKind::MissingRequiredField => "missing_required_field",
            FieldErrorKind::InvalidEmailFormat => "invalid_email_format",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

/// Every failing field of one submission, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub(crate) fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.get(field).map(|error| error.message.as_str())
    }

    /// Field name to message, the shape the page and JSON API report.
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|error| (error.field.clone(), error.message.clone()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
