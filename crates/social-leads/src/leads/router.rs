use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{deserialize_engagement, LeadCategory};
use super::filter::{DateRange, EngagementLevel, LeadQuery, PlatformFilter};
use super::pagination::PageRequest;
use super::repository::{ActionPublisher, LeadAction, LeadSource, SourceError};
use super::scoring::ScoreComponent;
use super::service::{LeadDeskService, LeadServiceError};

/// Router builder exposing the lead table, category, scoring, and action endpoints.
pub fn lead_router<S, A>(service: Arc<LeadDeskService<S, A>>) -> Router
where
    S: LeadSource + 'static,
    A: ActionPublisher + 'static,
{
    Router::new()
        .route("/api/v1/leads", get(table_handler::<S, A>))
        .route("/api/v1/leads/overview", get(overview_handler::<S, A>))
        .route("/api/v1/leads/categories", get(categories_handler::<S, A>))
        .route(
            "/api/v1/leads/categories/:category",
            get(category_detail_handler::<S, A>),
        )
        .route("/api/v1/leads/score", post(score_handler::<S, A>))
        .route("/api/v1/leads/actions", post(action_handler::<S, A>))
        .with_state(service)
}

/// Flat query string for the results table.
#[derive(Debug, Default, Deserialize)]
pub struct LeadTableParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub engagement_level: Option<EngagementLevel>,
    #[serde(default)]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub category: Option<LeadCategory>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl LeadTableParams {
    pub fn into_parts(self, default_page_size: usize) -> (LeadQuery, PageRequest) {
        let query = LeadQuery {
            search: self.search.unwrap_or_default(),
            platform: self
                .platform
                .map(PlatformFilter::from)
                .unwrap_or_default(),
            engagement_level: self.engagement_level.unwrap_or_default(),
            date_range: self.date_range.unwrap_or_default(),
            category: self.category,
        };
        let request = PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(default_page_size),
        );
        (query, request)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_engagement")]
    pub engagement: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub category: LeadCategory,
    pub category_label: &'static str,
    pub score: f64,
    pub urgency_score: f64,
    pub components: Vec<ScoreComponent>,
}

pub(crate) async fn table_handler<S, A>(
    State(service): State<Arc<LeadDeskService<S, A>>>,
    Query(params): Query<LeadTableParams>,
) -> Response
where
    S: LeadSource + 'static,
    A: ActionPublisher + 'static,
{
    let (query, request) = params.into_parts(service.page_size());
    match service.table(&query, request, Utc::now()) {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn overview_handler<S, A>(
    State(service): State<Arc<LeadDeskService<S, A>>>,
) -> Response
where
    S: LeadSource + 'static,
    A: ActionPublisher + 'static,
{
    match service.overview() {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn categories_handler<S, A>(
    State(service): State<Arc<LeadDeskService<S, A>>>,
) -> Response
where
    S: LeadSource + 'static,
    A: ActionPublisher + 'static,
{
    match service.categories() {
        Ok(cards) => (StatusCode::OK, axum::Json(cards)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn category_detail_handler<S, A>(
    State(service): State<Arc<LeadDeskService<S, A>>>,
    Path(category): Path<String>,
) -> Response
where
    S: LeadSource + 'static,
    A: ActionPublisher + 'static,
{
    let category = match category.parse::<LeadCategory>() {
        Ok(category) => category,
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
        }
    };

    match service.category_detail(category) {
        Ok(detail) => (StatusCode::OK, axum::Json(detail)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn score_handler<S, A>(
    State(service): State<Arc<LeadDeskService<S, A>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    S: LeadSource + 'static,
    A: ActionPublisher + 'static,
{
    let breakdown = service.score(&request.content, request.engagement);
    let response = ScoreResponse {
        category: breakdown.assessment.category,
        category_label: breakdown.assessment.category.label(),
        score: breakdown.assessment.score,
        urgency_score: breakdown.urgency_score(),
        components: breakdown.components,
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}

pub(crate) async fn action_handler<S, A>(
    State(service): State<Arc<LeadDeskService<S, A>>>,
    axum::Json(action): axum::Json<LeadAction>,
) -> Response
where
    S: LeadSource + 'static,
    A: ActionPublisher + 'static,
{
    match service.dispatch(action) {
        Ok(receipt) => (StatusCode::ACCEPTED, axum::Json(receipt)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: LeadServiceError) -> Response {
    let status = match err {
        LeadServiceError::Source(SourceError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
        LeadServiceError::Action(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
