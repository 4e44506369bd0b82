use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::page::PageRenderer;
use crate::routes::with_estimate_routes;
use axum_prometheus::PrometheusMetricLayer;
use hiring_cost::config::AppConfig;
use hiring_cost::error::AppError;
use hiring_cost::telemetry;
use hiring_cost::workflows::hiring::CostEstimator;
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

    let rules = config.rules.resolve()?;
    info!(
        rules_path = ?config.rules.path,
        southern_regions = rules.southern_regions.len(),
        "subsidy rules loaded"
    );

    let pages = PageRenderer::new().map_err(|err| AppError::Render(Box::new(err)))?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        estimator: Arc::new(CostEstimator::new(rules)),
        pages: Arc::new(pages),
    };

    let app = with_estimate_routes(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "hiring cost estimator ready");

    axum::serve(listener, app).await?;
    Ok(())
}
