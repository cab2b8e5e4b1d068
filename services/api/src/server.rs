use crate::cli::ServeArgs;
use crate::infra::{load_posts, AppState, InMemoryLeadSource, LoggingActionPublisher};
use crate::routes::with_lead_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use social_leads::config::AppConfig;
use social_leads::error::AppError;
use social_leads::leads::{LeadDeskService, ScoringConfig};
use social_leads::telemetry;
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

    let (posts, imported) = load_posts(config.leads.dataset_path.as_deref())?;
    info!(posts = posts.len(), imported, "lead source populated");

    let source = Arc::new(InMemoryLeadSource::new(posts));
    let actions = Arc::new(LoggingActionPublisher::default());
    let lead_service = Arc::new(LeadDeskService::new(
        source,
        actions,
        ScoringConfig::standard(),
        config.leads.page_size,
    ));

    let app = with_lead_routes(lead_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "social lead desk ready");

    axum::serve(listener, app).await?;
    Ok(())
}
