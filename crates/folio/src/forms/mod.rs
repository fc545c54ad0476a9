//! Inquiry form definition, validation, and submission.

pub mod definition;
pub mod field;
pub mod inquiry;
pub mod payload;
pub mod schema;
pub mod submit;

#[cfg(test)]
mod tests;

pub use definition::{FormDefinition, FormDefinitionError, FormOutcome};
pub use field::{FieldDescriptor, FieldKind};
pub use inquiry::{services_fields, services_form, services_schema, INQUIRY_TYPES, PLAN_CHOICES};
pub use payload::{FieldError, FieldErrorKind, FormValues, SubmissionPayload, ValidationErrors};
pub use schema::{is_valid_email, ValidationRule, ValidationSchema};
pub use submit::{LoggingSubmitHandler, SubmitError, SubmitHandler};
