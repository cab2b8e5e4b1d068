use crate::infra::{AppState, InMemoryLeadSource, LoggingActionPublisher};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use social_leads::config::DEFAULT_PAGE_SIZE;
use social_leads::error::AppError;
use social_leads::leads::report::views::{CategoryCard, LeadOverviewView, LeadTablePage};
use social_leads::leads::sample::sample_posts;
use social_leads::leads::{
    lead_router, ActionPublisher, LeadDeskService, LeadImporter, LeadQuery, LeadSource,
    PageRequest, ScoringConfig,
};
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct LeadReportRequest {
    #[serde(default)]
    pub(crate) leads_csv: Option<String>,
    #[serde(default)]
    pub(crate) query: LeadQuery,
    #[serde(default)]
    pub(crate) page: Option<usize>,
    #[serde(default)]
    pub(crate) page_size: Option<usize>,
    /// Reference instant for date-range filters (defaults to now).
    #[serde(default)]
    pub(crate) as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct LeadReportResponse {
    pub(crate) as_of: DateTime<Utc>,
    pub(crate) data_source: LeadDataSource,
    pub(crate) overview: LeadOverviewView,
    pub(crate) categories: Vec<CategoryCard>,
    pub(crate) table: LeadTablePage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum LeadDataSource {
    Csv,
    Sample,
}

pub(crate) fn with_lead_routes<S, A>(service: Arc<LeadDeskService<S, A>>) -> axum::Router
where
    S: LeadSource + 'static,
    A: ActionPublisher + 'static,
{
    lead_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/leads/report",
            axum::routing::post(lead_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// One-shot report over an uploaded CSV export, or over the sample posts when none is sent.
pub(crate) async fn lead_report_endpoint(
    Json(payload): Json<LeadReportRequest>,
) -> Result<Json<LeadReportResponse>, AppError> {
    let LeadReportRequest {
        leads_csv,
        query,
        page,
        page_size,
        as_of,
    } = payload;

    let (posts, data_source) = match leads_csv {
        Some(csv) => {
            let reader = Cursor::new(csv.into_bytes());
            (LeadImporter::from_csv_reader(reader)?, LeadDataSource::Csv)
        }
        None => (sample_posts(), LeadDataSource::Sample),
    };

    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    let service = LeadDeskService::new(
        Arc::new(InMemoryLeadSource::new(posts)),
        Arc::new(LoggingActionPublisher::default()),
        ScoringConfig::standard(),
        page_size,
    );

    let as_of = as_of.unwrap_or_else(Utc::now);
    let table = service.table(&query, PageRequest::new(page.unwrap_or(1), page_size), as_of)?;

    Ok(Json(LeadReportResponse {
        as_of,
        data_source,
        overview: service.overview()?,
        categories: service.categories()?,
        table,
    }))
}
