use folio::config::SiteConfig;
use folio::content::ContentCatalog;
use folio::error::AppError;
use folio::forms::{services_form, SubmitHandler};
use folio::page::ServicesPage;
use folio::site::ServicesSite;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the page from config; `content_override` beats `APP_CONTENT_PATH`.
pub(crate) fn build_page(
    site: &SiteConfig,
    content_override: Option<&Path>,
) -> Result<ServicesPage, AppError> {
    let content_path = content_override.or(site.content_path.as_deref());
    let catalog = ContentCatalog::load(content_path)?;
    let form = services_form()?;
    Ok(ServicesPage::new(catalog, form, site.asset_base.clone()))
}

pub(crate) fn build_site<H>(
    site: &SiteConfig,
    handler: Arc<H>,
) -> Result<ServicesSite<H>, AppError>
where
    H: SubmitHandler + 'static,
{
    let page = build_page(site, None)?;
    Ok(ServicesSite::new(page, handler))
}

/// Parses `name=value`; only the first `=` separates, so values may contain more.
pub(crate) fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("field name missing in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}
