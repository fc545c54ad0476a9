use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use super::payload::{FieldError, FieldErrorKind, FormValues, SubmissionPayload, ValidationErrors};

/// Constraint attached to one field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRule {
    /// Declared field without constraints; kept in the payload when supplied.
    Optional,
    Required { message: String },
    /// Skips absent and empty values so `Required` owns that message.
    EmailFormat { message: String },
    /// Rules checked in order; the first failure is the one reported.
    Combined(Vec<ValidationRule>),
}

impl ValidationRule {
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::EmailFormat {
            message: message.into(),
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            ValidationRule::Required { .. } => true,
            ValidationRule::Combined(rules) => rules.iter().any(ValidationRule::is_required),
            ValidationRule::Optional | ValidationRule::EmailFormat { .. } => false,
        }
    }

    /// Returns the first failing constraint for `value`, if any.
    pub fn check(&self, value: Option<&str>) -> Option<(FieldErrorKind, &str)> {
        match self {
            ValidationRule::Optional => None,
            ValidationRule::Required { message } => match value {
                Some(value) if !value.is_empty() => None,
                _ => Some((FieldErrorKind::MissingRequiredField, message.as_str())),
            },
            ValidationRule::EmailFormat { message } => match value {
                Some(value) if !value.is_empty() && !is_valid_email(value) => {
                    Some((FieldErrorKind::InvalidEmailFormat, message.as_str()))
                }
                _ => None,
            },
            ValidationRule::Combined(rules) => rules.iter().find_map(|rule| rule.check(value)),
        }
    }
}

/// WHATWG `type=email` pattern with at least one dot in the domain, the
/// dotted-domain rule of yup 0.32's `string().email()`.
fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
        )
        .expect("email pattern compiles")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Ordered mapping from field name to its rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSchema {
    rules: Vec<(String, ValidationRule)>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, rule: ValidationRule) -> Self {
        self.rules.push((name.into(), rule));
        self
    }

    pub fn rule_for(&self, name: &str) -> Option<&ValidationRule> {
        self.rules
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, rule)| rule)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|(name, _)| name.as_str())
    }

    /// Checks every declared field and reports all failures together.
    ///
    /// Keys the schema does not declare are ignored and left out of the payload.
    pub fn validate(&self, values: &FormValues) -> Result<SubmissionPayload, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let mut accepted = BTreeMap::new();

        for (name, rule) in &self.rules {
            let value = values.get(name).map(String::as_str);
            match rule.check(value) {
                Some((kind, message)) => errors.push(FieldError {
                    field: name.clone(),
                    kind,
                    message: message.to_string(),
                }),
                None => {
                    if let Some(value) = value {
                        accepted.insert(name.clone(), value.to_string());
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(SubmissionPayload::new(accepted))
        } else {
            Err(errors)
        }
    }
}
