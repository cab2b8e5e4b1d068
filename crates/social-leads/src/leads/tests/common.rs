use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::leads::domain::{PostId, PostKind, SocialPost};
use crate::leads::repository::{
    ActionError, ActionPublisher, ActionReceipt, LeadAction, LeadSource, SourceError,
};
use crate::leads::sample::sample_posts;
use crate::leads::{lead_router, LeadDeskService, LeadScorer, ScoringConfig};

pub(super) const PAGE_SIZE: usize = 10;

/// Evaluation instant a few hours after the newest seed post.
pub(super) fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 18, 0, 0)
        .single()
        .expect("valid instant")
}

pub(super) fn scorer() -> LeadScorer {
    LeadScorer::standard()
}

pub(super) fn post(id: &str, platform: &str, content: &str, engagement: u64) -> SocialPost {
    SocialPost {
        id: PostId(id.to_string()),
        username: format!("user_{id}"),
        platform: platform.to_string(),
        content: content.to_string(),
        engagement_count: engagement,
        location: None,
        profile_url: format!("https://example.com/{id}"),
        timestamp: now(),
        post_kind: PostKind::Post,
    }
}

/// Twenty-five posts cycling through the three categories so pagination has three pages.
pub(super) fn bulk_posts() -> Vec<SocialPost> {
    let contents = [
        "Hiring a data team ASAP",
        "Considering a CRM switch next quarter",
        "Maybe someday we will automate",
    ];
    (0..25)
        .map(|index| {
            let content = contents[index % contents.len()];
            post(&format!("bulk-{index}"), "Twitter", content, index as u64 * 40)
        })
        .collect()
}

pub(super) fn build_service() -> (
    LeadDeskService<MemorySource, MemoryActions>,
    Arc<MemorySource>,
    Arc<MemoryActions>,
) {
    build_service_with(sample_posts())
}

pub(super) fn build_service_with(
    posts: Vec<SocialPost>,
) -> (
    LeadDeskService<MemorySource, MemoryActions>,
    Arc<MemorySource>,
    Arc<MemoryActions>,
) {
    let source = Arc::new(MemorySource::new(posts));
    let actions = Arc::new(MemoryActions::default());
    let service = LeadDeskService::new(
        source.clone(),
        actions.clone(),
        ScoringConfig::standard(),
        PAGE_SIZE,
    );
    (service, source, actions)
}

#[derive(Default, Clone)]
pub(super) struct MemorySource {
    posts: Arc<Mutex<Vec<SocialPost>>>,
}

impl MemorySource {
    pub(super) fn new(posts: Vec<SocialPost>) -> Self {
        Self {
            posts: Arc::new(Mutex::new(posts)),
        }
    }

    pub(super) fn push(&self, post: SocialPost) {
        self.posts.lock().expect("source mutex poisoned").push(post);
    }
}

impl LeadSource for MemorySource {
    fn posts(&self) -> Result<Vec<SocialPost>, SourceError> {
        Ok(self.posts.lock().expect("source mutex poisoned").clone())
    }
}

pub(super) struct UnavailableSource;

impl LeadSource for UnavailableSource {
    fn posts(&self) -> Result<Vec<SocialPost>, SourceError> {
        Err(SourceError::Unavailable("scraper offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryActions {
    events: Arc<Mutex<Vec<LeadAction>>>,
}

impl MemoryActions {
    pub(super) fn events(&self) -> Vec<LeadAction> {
        self.events.lock().expect("action mutex poisoned").clone()
    }
}

impl ActionPublisher for MemoryActions {
    fn publish(&self, action: LeadAction) -> Result<ActionReceipt, ActionError> {
        let receipt = ActionReceipt::accepted(&action);
        self.events
            .lock()
            .expect("action mutex poisoned")
            .push(action);
        Ok(receipt)
    }
}

pub(super) struct FailingActions;

impl ActionPublisher for FailingActions {
    fn publish(&self, _action: LeadAction) -> Result<ActionReceipt, ActionError> {
        Err(ActionError::Transport("queue closed".to_string()))
    }
}

pub(super) fn lead_router_with_service(
    service: LeadDeskService<MemorySource, MemoryActions>,
) -> axum::Router {
    lead_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
