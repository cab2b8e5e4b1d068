mod config;
mod rules;

pub use config::{EngagementBonus, KeywordTier, ScoringConfig};

use super::domain::{LeadAssessment, LeadCategory, ScoredLead, SocialPost};
use serde::{Deserialize, Serialize};

/// Stateless scorer applying a keyword rubric to post text and engagement.
///
/// Assessments depend only on `(content, engagement)`, so callers may score every record on
/// every request without caching.
#[derive(Debug, Clone)]
pub struct LeadScorer {
    config: ScoringConfig,
}

impl LeadScorer {
    pub fn new(mut config: ScoringConfig) -> Self {
        for tier in &mut config.keyword_tiers {
            tier.keywords = tier
                .keywords
                .iter()
                .map(|keyword| keyword.to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect();
        }
        Self { config }
    }

    pub fn standard() -> Self {
        Self::new(ScoringConfig::standard())
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn assess(&self, content: &str, engagement: u64) -> LeadAssessment {
        self.evaluate(content, engagement).assessment
    }

    /// Assess and keep the per-keyword and per-tier contributions.
    pub fn evaluate(&self, content: &str, engagement: u64) -> ScoreBreakdown {
        let text = content.to_lowercase();
        let (mut components, keyword_score) =
            rules::score_keywords(&text, &self.config.keyword_tiers);
        let (engagement_components, engagement_score) =
            rules::score_engagement(engagement, &self.config.engagement_bonuses);
        components.extend(engagement_components);

        let score = keyword_score + engagement_score;
        let category = rules::categorize(
            score,
            self.config.hot_threshold,
            self.config.warm_threshold,
        );

        ScoreBreakdown {
            assessment: LeadAssessment { category, score },
            components,
        }
    }

    pub fn score_post(&self, post: &SocialPost) -> ScoredLead {
        ScoredLead {
            assessment: self.assess(&post.content, post.engagement_count),
            post: post.clone(),
        }
    }
}

impl Default for LeadScorer {
    fn default() -> Self {
        Self::standard()
    }
}

/// What produced a score contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreFactor {
    Keyword { tier: LeadCategory, keyword: String },
    Engagement { above: u64 },
}

/// Discrete contribution to a score, kept for audits and detail views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub weight: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub assessment: LeadAssessment,
    pub components: Vec<ScoreComponent>,
}

impl ScoreBreakdown {
    pub fn urgency_score(&self) -> f64 {
        self.assessment.urgency_score()
    }
}
