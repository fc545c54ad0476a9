//! Server-side rendering of the services page.

pub mod form;
pub(crate) mod html;
mod sections;

use std::fmt::{self, Write as _};

use crate::content::ContentCatalog;
use crate::forms::FormDefinition;

pub use form::{FormView, Notice};

/// Form `action` the contact section posts to.
pub const INQUIRY_ACTION: &str = "/services/inquiry";

/// Content, form definition, and asset base needed to render the page.
#[derive(Debug, Clone)]
pub struct ServicesPage {
    catalog: ContentCatalog,
    form: FormDefinition,
    asset_base: String,
}

impl ServicesPage {
    pub fn new(
        catalog: ContentCatalog,
        form: FormDefinition,
        asset_base: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            form,
            asset_base: asset_base.into(),
        }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn form(&self) -> &FormDefinition {
        &self.form
    }

    pub fn asset_base(&self) -> &str {
        &self.asset_base
    }

    /// Renders the full HTML document with the contact form in the given state.
    pub fn render(&self, view: &FormView) -> String {
        let mut html = String::with_capacity(16 * 1024);
        self.write_document(&mut html, view)
            .expect("writing to a String cannot fail");
        html
    }

    fn write_document(&self, out: &mut String, view: &FormView) -> fmt::Result {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(
            out,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        )?;
        writeln!(out, "<title>{}</title>", html::escape_html(sections::NAVBAR_TITLE))?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "<main class=\"services-page\">")?;

        sections::navbar(out)?;
        writeln!(out, "<div class=\"page-content\">")?;
        sections::hero(out, &self.asset_base)?;
        sections::services_grid(out, &self.catalog.services, &self.asset_base)?;
        sections::proof_of_work(out, &self.asset_base)?;
        sections::pricing_plans(out, &self.catalog.pricing)?;
        sections::testimonials(out, &self.catalog.testimonials)?;
        self.write_contact(out, view)?;
        writeln!(out, "</div>")?;
        sections::footer(out)?;

        writeln!(out, "</main>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }

    fn write_contact(&self, out: &mut String, view: &FormView) -> fmt::Result {
        writeln!(out, "<section id=\"contact\" class=\"contact\">")?;
        writeln!(out, "<h3>Get in Touch</h3>")?;
        form::write_form(out, &self.form, view, INQUIRY_ACTION)?;
        writeln!(out, "</section>")
    }
}
