use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{LeadCategory, ScoredLead, SocialPost};
use super::scoring::LeadScorer;

/// Platform selector; `all` is the sentinel that disables the predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlatformFilter {
    #[default]
    All,
    Named(String),
}

impl From<String> for PlatformFilter {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(trimmed.to_string())
        }
    }
}

impl From<&str> for PlatformFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<PlatformFilter> for String {
    fn from(value: PlatformFilter) -> Self {
        match value {
            PlatformFilter::All => "all".to_string(),
            PlatformFilter::Named(name) => name,
        }
    }
}

/// Engagement buckets offered by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementLevel {
    #[default]
    All,
    /// 50 or more interactions.
    High,
    /// 10 to 49 interactions.
    Medium,
    /// 1 to 9 interactions.
    Low,
}

impl EngagementLevel {
    pub fn matches(self, engagement: u64) -> bool {
        match self {
            Self::All => true,
            Self::High => engagement >= 50,
            Self::Medium => (10..50).contains(&engagement),
            Self::Low => (1..10).contains(&engagement),
        }
    }
}

/// Look-back window relative to the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[serde(rename = "1d")]
    LastDay,
    #[serde(rename = "7d")]
    LastWeek,
    #[serde(rename = "30d")]
    LastMonth,
    #[serde(rename = "90d")]
    LastQuarter,
    #[default]
    #[serde(rename = "all")]
    AllTime,
}

impl DateRange {
    pub fn window(self) -> Option<Duration> {
        match self {
            Self::LastDay => Some(Duration::days(1)),
            Self::LastWeek => Some(Duration::days(7)),
            Self::LastMonth => Some(Duration::days(30)),
            Self::LastQuarter => Some(Duration::days(90)),
            Self::AllTime => None,
        }
    }

    pub fn contains(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.window() {
            Some(window) => timestamp >= now - window,
            None => true,
        }
    }
}

/// Table filters. Every active predicate must pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadQuery {
    pub search: String,
    pub platform: PlatformFilter,
    pub engagement_level: EngagementLevel,
    pub date_range: DateRange,
    pub category: Option<LeadCategory>,
}

impl LeadQuery {
    pub fn matches_post(&self, post: &SocialPost, now: DateTime<Utc>) -> bool {
        matches_search(post, &self.search)
            && matches_platform(post, &self.platform)
            && self.engagement_level.matches(post.engagement_count)
            && self.date_range.contains(post.timestamp, now)
    }

    /// Filter and score in one pass, keeping source order.
    pub fn apply(
        &self,
        posts: &[SocialPost],
        scorer: &LeadScorer,
        now: DateTime<Utc>,
    ) -> Vec<ScoredLead> {
        posts
            .iter()
            .filter(|post| self.matches_post(post, now))
            .map(|post| scorer.score_post(post))
            .filter(|lead| {
                self.category
                    .map_or(true, |category| lead.assessment.category == category)
            })
            .collect()
    }
}

/// Case-insensitive substring match on username or content. Empty terms match everything.
pub fn matches_search(post: &SocialPost, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    post.username.to_lowercase().contains(&needle) || post.content.to_lowercase().contains(&needle)
}

pub fn matches_platform(post: &SocialPost, platform: &PlatformFilter) -> bool {
    match platform {
        PlatformFilter::All => true,
        PlatformFilter::Named(name) => same_platform(&post.platform, name),
    }
}

/// Platform names compare case-insensitively everywhere they are matched or grouped.
pub(crate) fn same_platform(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}
