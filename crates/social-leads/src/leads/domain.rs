use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier for a scraped post or comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub String);

/// Whether the record was a top-level post or a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    #[default]
    Post,
    Comment,
}

impl PostKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }
}

/// Social post under evaluation as a potential sales prospect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: PostId,
    pub username: String,
    pub platform: String,
    #[serde(default)]
    pub content: String,
    #[serde(
        alias = "engagement",
        default,
        deserialize_with = "deserialize_engagement"
    )]
    pub engagement_count: u64,
    #[serde(default)]
    pub location: Option<String>,
    pub profile_url: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, alias = "post_type")]
    pub post_kind: PostKind,
}

/// Three-tier urgency classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadCategory {
    Hot,
    Warm,
    Cold,
}

impl LeadCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Hot, Self::Warm, Self::Cold]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cold => "cold",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hot => "Hot Leads",
            Self::Warm => "Warm Leads",
            Self::Cold => "Cold Leads",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Hot => "High urgency, ready to engage",
            Self::Warm => "Interested, needs nurturing",
            Self::Cold => "Low urgency, long-term prospects",
        }
    }
}

impl fmt::Display for LeadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lead category '{0}' (expected hot, warm, or cold)")]
pub struct UnknownCategory(pub String);

impl FromStr for LeadCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "hot" => Ok(Self::Hot),
            "warm" => Ok(Self::Warm),
            "cold" => Ok(Self::Cold),
            _ => Err(UnknownCategory(value.to_string())),
        }
    }
}

/// Derived classification of a single post. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeadAssessment {
    pub category: LeadCategory,
    /// Raw score; negative when cold keywords dominate.
    pub score: f64,
}

impl LeadAssessment {
    /// Score as surfaced in list and detail views, floored at zero.
    pub fn urgency_score(&self) -> f64 {
        self.score.max(0.0)
    }
}

/// A post paired with its assessment for the current render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredLead {
    pub post: SocialPost,
    pub assessment: LeadAssessment,
}

/// Map an arbitrary engagement figure onto the domain's `u64`.
///
/// Negative and NaN become 0, fractions are floored, and positive infinity saturates.
pub fn coerce_engagement(raw: f64) -> u64 {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    if raw.is_infinite() {
        return u64::MAX;
    }
    raw.floor() as u64
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEngagement {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

pub(crate) fn deserialize_engagement<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawEngagement>::deserialize(deserializer)?;
    let value = match raw {
        None => return Ok(0),
        Some(RawEngagement::Unsigned(value)) => return Ok(value),
        Some(RawEngagement::Signed(value)) => value as f64,
        Some(RawEngagement::Float(value)) => value,
        Some(RawEngagement::Text(text)) => {
            let trimmed = text.trim().replace(',', "");
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed.parse::<f64>().map_err(|_| {
                serde::de::Error::custom(format!("engagement '{text}' is not a number"))
            })?
        }
    };

    let coerced = coerce_engagement(value);
    if coerced as f64 != value {
        tracing::warn!(raw = value, coerced, "engagement outside u64 range coerced");
    }
    Ok(coerced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_engagement_handles_out_of_contract_values() {
        assert_eq!(coerce_engagement(-12.0), 0);
        assert_eq!(coerce_engagement(f64::NAN), 0);
        assert_eq!(coerce_engagement(f64::INFINITY), u64::MAX);
        assert_eq!(coerce_engagement(812.9), 812);
        assert_eq!(coerce_engagement(1200.0), 1200);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("HOT".parse::<LeadCategory>(), Ok(LeadCategory::Hot));
        assert_eq!(" warm ".parse::<LeadCategory>(), Ok(LeadCategory::Warm));
        assert!("lukewarm".parse::<LeadCategory>().is_err());
    }

    #[test]
    fn urgency_score_floors_negative_scores() {
        let assessment = LeadAssessment {
            category: LeadCategory::Cold,
            score: -1.5,
        };
        assert_eq!(assessment.urgency_score(), 0.0);
        assert_eq!(assessment.score, -1.5);
    }

    #[test]
    fn posts_deserialize_with_lenient_engagement() {
        let payload = r#"{
            "id": "9",
            "username": "ops_lead",
            "platform": "LinkedIn",
            "content": "Evaluating vendors",
            "engagement": -40,
            "profile_url": "https://linkedin.com/in/ops-lead",
            "timestamp": "2024-01-15T14:30:00Z",
            "post_type": "comment"
        }"#;

        let post: SocialPost = serde_json::from_str(payload).expect("post parses");
        assert_eq!(post.engagement_count, 0);
        assert_eq!(post.post_kind, PostKind::Comment);
        assert!(post.location.is_none());
    }
}
