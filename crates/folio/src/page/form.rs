use std::fmt::{self, Write as _};

use super::html::{escape_html, field_id};
use crate::forms::{FieldDescriptor, FieldKind, FormDefinition, FormValues, ValidationErrors};

/// Banner shown above the form after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

/// Per-request state of the inquiry form: bound values, inline errors, and a notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub values: FormValues,
    pub errors: ValidationErrors,
    pub notice: Option<Notice>,
}

impl FormView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rejected(values: FormValues, errors: ValidationErrors) -> Self {
        Self {
            values,
            errors,
            notice: None,
        }
    }

    /// Clears the form after a successful submission.
    pub fn submitted() -> Self {
        Self {
            notice: Some(Notice::Success(
                "Thanks for reaching out! I'll get back to you shortly.".to_string(),
            )),
            ..Self::default()
        }
    }

    /// Keeps the values so the visitor can retry.
    pub fn failed(values: FormValues, reason: impl Into<String>) -> Self {
        Self {
            values,
            errors: ValidationErrors::default(),
            notice: Some(Notice::Failure(reason.into())),
        }
    }

    fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }
}

pub(crate) fn write_form(
    out: &mut String,
    form: &FormDefinition,
    view: &FormView,
    action: &str,
) -> fmt::Result {
    match &view.notice {
        Some(Notice::Success(message)) => writeln!(
            out,
            "<p class=\"form-notice success\" role=\"status\">{}</p>",
            escape_html(message)
        )?,
        Some(Notice::Failure(message)) => writeln!(
            out,
            "<p class=\"form-notice failure\" role=\"alert\">{}</p>",
            escape_html(message)
        )?,
        None => {}
    }

    writeln!(
        out,
        "<form class=\"inquiry-form\" method=\"post\" action=\"{}\" novalidate>",
        escape_html(action)
    )?;
    for field in form.fields() {
        write_field(out, field, view)?;
    }
    writeln!(out, "<button type=\"submit\">Send Inquiry</button>")?;
    writeln!(out, "</form>")
}

fn write_field(out: &mut String, field: &FieldDescriptor, view: &FormView) -> fmt::Result {
    let id = field_id(&field.name);
    let name = escape_html(&field.name);
    let value = view.value(&field.name);
    let error = view.errors.message_for(&field.name);

    writeln!(out, "<div class=\"form-field\" data-field=\"{name}\">")?;
    write!(out, "<label for=\"{id}\">{}", escape_html(&field.label))?;
    if field.required {
        write!(out, " <span class=\"required\" aria-hidden=\"true\">*</span>")?;
    }
    writeln!(out, "</label>")?;

    let mut attrs = format!("id=\"{id}\" name=\"{name}\"");
    if field.required {
        attrs.push_str(" required");
    }
    if let Some(placeholder) = &field.placeholder {
        write!(attrs, " placeholder=\"{}\"", escape_html(placeholder))?;
    }
    if error.is_some() {
        write!(attrs, " aria-invalid=\"true\" aria-describedby=\"{id}-error\"")?;
    }

    match &field.kind {
        FieldKind::Text | FieldKind::Email => writeln!(
            out,
            "<input type=\"{}\" {attrs} value=\"{}\">",
            field.kind.label(),
            escape_html(value)
        )?,
        FieldKind::TextArea => writeln!(
            out,
            "<textarea {attrs} rows=\"5\">{}</textarea>",
            escape_html(value)
        )?,
        FieldKind::Select { options } => {
            writeln!(out, "<select {attrs}>")?;
            writeln!(out, "<option value=\"\">Select…</option>")?;
            for option in options {
                let selected = if option == value { " selected" } else { "" };
                let option = escape_html(option);
                writeln!(out, "<option value=\"{option}\"{selected}>{option}</option>")?;
            }
            writeln!(out, "</select>")?;
        }
    }

    writeln!(
        out,
        "<p class=\"field-error\" id=\"{id}-error\">{}</p>",
        error.map(escape_html).unwrap_or_default()
    )?;
    writeln!(out, "</div>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ValidationRule, ValidationSchema};

    fn feedback_form() -> FormDefinition {
        let fields = vec![
            FieldDescriptor::new("topic", "Topic", FieldKind::select(["Billing", "Support"]))
                .required(),
            FieldDescriptor::new("details", "Details", FieldKind::TextArea)
                .with_placeholder("Tell me \"everything\" <briefly>"),
        ];
        let schema = ValidationSchema::new()
            .field("topic", ValidationRule::required("Pick a topic"))
            .field("details", ValidationRule::Optional);
        FormDefinition::new(fields, schema).expect("feedback form")
    }

    fn render(view: &FormView) -> String {
        let mut html = String::new();
        write_form(&mut html, &feedback_form(), view, "/feedback").expect("write form");
        html
    }

    #[test]
    fn textarea_renders_escaped_placeholder_and_value() {
        let mut values = FormValues::new();
        values.insert("details".to_string(), "a < b".to_string());

        let html = render(&FormView::rejected(values, ValidationErrors::default()));

        assert!(html.contains(
            "<textarea id=\"field-details\" name=\"details\" \
             placeholder=\"Tell me &quot;everything&quot; &lt;briefly&gt;\" rows=\"5\">\
             a &lt; b</textarea>"
        ));
        assert!(!html.contains("<input type=\"text\" id=\"field-details\""));
    }

    #[test]
    fn select_starts_with_an_empty_choice() {
        let html = render(&FormView::empty());

        let select = html.find("<select id=\"field-topic\"").expect("topic select");
        let first_option = html[select..].find("<option").expect("an option") + select;
        assert!(html[first_option..].starts_with("<option value=\"\">Select…</option>"));
        assert!(html.contains("<option value=\"Billing\">Billing</option>"));
        assert!(!html.contains("placeholder=\"\""));
    }

    #[test]
    fn required_marker_only_on_required_fields() {
        let html = render(&FormView::empty());

        assert_eq!(html.matches("class=\"required\"").count(), 1);
        assert!(html.contains("action=\"/feedback\""));
    }
}
