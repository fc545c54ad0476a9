use std::collections::BTreeSet;

use tracing::debug;

use super::field::{FieldDescriptor, FieldKind};
use super::payload::{FormValues, SubmissionPayload, ValidationErrors};
use super::schema::ValidationSchema;
use super::submit::{SubmitError, SubmitHandler};

/// Problems detected while assembling a form from its fields and schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormDefinitionError {
    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),
    #[error("select field '{0}' has no options")]
    EmptyOptions(String),
    #[error("validation schema references unknown field '{0}'")]
    UnknownField(String),
}

/// Result of pushing a set of values through the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Values passed validation and the handler accepted the payload.
    Submitted(SubmissionPayload),
    /// Values failed validation; the handler was not called.
    Rejected(ValidationErrors),
}

impl FormOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, FormOutcome::Submitted(_))
    }
}

/// Field list plus validation schema, checked once and immutable afterwards.
#[derive(Debug, Clone)]
pub struct FormDefinition {
    fields: Vec<FieldDescriptor>,
    schema: ValidationSchema,
}

impl FormDefinition {
    pub fn new(
        fields: Vec<FieldDescriptor>,
        schema: ValidationSchema,
    ) -> Result<Self, FormDefinitionError> {
        let mut seen = BTreeSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(FormDefinitionError::DuplicateField(field.name.clone()));
            }
            if let FieldKind::Select { options } = &field.kind {
                if options.is_empty() {
                    return Err(FormDefinitionError::EmptyOptions(field.name.clone()));
                }
            }
        }

        if let Some(unknown) = schema.field_names().find(|name| !seen.contains(name)) {
            return Err(FormDefinitionError::UnknownField(unknown.to_string()));
        }

        Ok(Self { fields, schema })
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    pub fn validate(&self, values: &FormValues) -> Result<SubmissionPayload, ValidationErrors> {
        self.schema.validate(values)
    }

    /// Validate `values` and hand the payload to `handler` only when every rule passes.
    pub fn submit<H>(&self, values: &FormValues, handler: &H) -> Result<FormOutcome, SubmitError>
    where
        H: SubmitHandler + ?Sized,
    {
        match self.validate(values) {
            Ok(payload) => {
                handler.submit(&payload)?;
                Ok(FormOutcome::Submitted(payload))
            }
            Err(errors) => {
                debug!(failed = errors.len(), "inquiry rejected by validation");
                Ok(FormOutcome::Rejected(errors))
            }
        }
    }
}
