//! The "Get in Touch" inquiry form shown on the services page.

use super::definition::{FormDefinition, FormDefinitionError};
use super::field::{FieldDescriptor, FieldKind};
use super::schema::{ValidationRule, ValidationSchema};

pub const INQUIRY_TYPES: [&str; 5] = [
    "Web Development",
    "Mobile App Development",
    "UI/UX Design",
    "SEO Optimization",
    "Custom Software Solutions",
];

pub const PLAN_CHOICES: [&str; 2] = ["Sustainable", "Easy"];

pub fn services_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("name", "Name", FieldKind::Text).required(),
        FieldDescriptor::new("email", "Email", FieldKind::Email).required(),
        FieldDescriptor::new("inquiryType", "Inquiry Type", FieldKind::select(INQUIRY_TYPES))
            .required(),
        FieldDescriptor::new("plan", "Plan (Optional)", FieldKind::select(PLAN_CHOICES)),
        FieldDescriptor::new("message", "Message", FieldKind::Text).required(),
    ]
}

pub fn services_schema() -> ValidationSchema {
    ValidationSchema::new()
        .field("name", ValidationRule::required("Name is required"))
        .field(
            "email",
            ValidationRule::Combined(vec![
                ValidationRule::email("Invalid email"),
                ValidationRule::required("Email is required"),
            ]),
        )
        .field(
            "inquiryType",
            ValidationRule::required("Please select an inquiry type"),
        )
        .field("message", ValidationRule::required("Message is required"))
        .field("plan", ValidationRule::Optional)
}

pub fn services_form() -> Result<FormDefinition, FormDefinitionError> {
    FormDefinition::new(services_fields(), services_schema())
}
