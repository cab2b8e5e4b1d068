use chrono::{DateTime, Utc};
use serde::Serialize;

use super::super::domain::{LeadCategory, PostId, PostKind, ScoredLead};
use super::super::pagination::Page;

/// Table/detail row for a scored lead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadView {
    pub id: PostId,
    pub username: String,
    pub platform: String,
    pub content: String,
    pub engagement: u64,
    pub location: Option<String>,
    pub profile_url: String,
    pub timestamp: DateTime<Utc>,
    pub post_kind: PostKind,
    pub category: LeadCategory,
    pub category_label: &'static str,
    pub score: f64,
    pub urgency_score: f64,
}

impl From<&ScoredLead> for LeadView {
    fn from(lead: &ScoredLead) -> Self {
        let post = &lead.post;
        Self {
            id: post.id.clone(),
            username: post.username.clone(),
            platform: post.platform.clone(),
            content: post.content.clone(),
            engagement: post.engagement_count,
            location: post.location.clone(),
            profile_url: post.profile_url.clone(),
            timestamp: post.timestamp,
            post_kind: post.post_kind,
            category: lead.assessment.category,
            category_label: lead.assessment.category.label(),
            score: lead.assessment.score,
            urgency_score: lead.assessment.urgency_score(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCard {
    pub category: LeadCategory,
    pub label: &'static str,
    pub description: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDetailView {
    pub card: CategoryCard,
    pub leads: Vec<LeadView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformCount {
    pub platform: String,
    pub leads: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadOverviewView {
    pub total_leads: usize,
    pub hot_leads: usize,
    pub warm_leads: usize,
    pub cold_leads: usize,
    pub hot_share_pct: f64,
    pub average_engagement: f64,
    pub platforms: Vec<PlatformCount>,
}

/// One page of the results table plus the size of the filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadTablePage {
    pub total_results: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub rows: Vec<LeadView>,
}

impl From<Page<LeadView>> for LeadTablePage {
    fn from(page: Page<LeadView>) -> Self {
        Self {
            total_results: page.total_items,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages,
            rows: page.items,
        }
    }
}
