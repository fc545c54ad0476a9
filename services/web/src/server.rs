use crate::cli::ServeArgs;
use crate::infra::{build_site, AppState};
use crate::routes::with_ops_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use folio::config::AppConfig;
use folio::error::AppError;
use folio::forms::LoggingSubmitHandler;
use folio::site::services_router;
use folio::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let site = Arc::new(build_site(&config.site, Arc::new(LoggingSubmitHandler))?);
    let fields = site.page().form().fields().len();
    let services = site.page().catalog().services.len();

    let app = with_ops_routes(services_router(site))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        asset_base = %config.site.asset_base,
        fields,
        services,
        "services page ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
