use crate::infra::build_page;
use clap::Args;
use folio::config::AppConfig;
use folio::error::AppError;
use folio::forms::{services_form, FieldDescriptor, FieldKind, FormValues};
use folio::page::FormView;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct RenderArgs {
    /// Write the HTML to this file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// JSON content catalog to render instead of the configured one
    #[arg(long)]
    pub(crate) content: Option<PathBuf>,
    /// Override the configured asset base URL
    #[arg(long)]
    pub(crate) asset_base: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ValidateArgs {
    /// Field value as NAME=VALUE; repeat for each field
    #[arg(long = "field", value_parser = crate::infra::parse_field)]
    pub(crate) fields: Vec<(String, String)>,
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let RenderArgs {
        output,
        content,
        asset_base,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(asset_base) = asset_base {
        config.site.asset_base = asset_base;
    }

    let page = build_page(&config.site, content.as_deref())?;
    let html = page.render(&FormView::empty());

    match output {
        Some(path) => {
            std::fs::write(&path, html)?;
            println!("Rendered services page to {}", path.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}

/// Returns whether the values passed validation.
pub(crate) fn run_validate(args: ValidateArgs) -> Result<bool, AppError> {
    let values: FormValues = args.fields.into_iter().collect();
    let form = services_form()?;

    match form.validate(&values) {
        Ok(payload) => {
            println!("Inquiry is valid ({} fields)", payload.fields().len());
            match serde_json::to_string_pretty(&payload) {
                Ok(json) => println!("{json}"),
                Err(err) => println!("Payload unavailable: {err}"),
            }
            Ok(true)
        }
        Err(errors) => {
            println!("Inquiry rejected ({} fields)", errors.len());
            for error in &errors {
                println!(
                    "- {}: {} [{}]",
                    error.field,
                    error.message,
                    error.kind.label()
                );
            }
            Ok(false)
        }
    }
}

pub(crate) fn run_fields() -> Result<(), AppError> {
    let form = services_form()?;

    println!("Inquiry form fields");
    for field in form.fields() {
        println!("- {}", describe_field(field));
    }

    Ok(())
}

fn describe_field(field: &FieldDescriptor) -> String {
    let requirement = if field.required { "required" } else { "optional" };
    let mut line = format!(
        "{} \"{}\" ({}, {})",
        field.name,
        field.label,
        field.kind.label(),
        requirement
    );
    if let FieldKind::Select { options } = &field.kind {
        line.push_str(": ");
        line.push_str(&options.join(" | "));
    }
    line
}
