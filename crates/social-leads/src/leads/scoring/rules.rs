use super::super::domain::LeadCategory;
use super::config::{EngagementBonus, KeywordTier};
use super::{ScoreComponent, ScoreFactor};

/// Scan lower-cased text against every tier. Each keyword is checked independently.
pub(crate) fn score_keywords(
    text: &str,
    tiers: &[KeywordTier],
) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::new();
    let mut total = 0.0;

    for tier in tiers {
        for keyword in &tier.keywords {
            if text.contains(keyword.as_str()) {
                components.push(ScoreComponent {
                    factor: ScoreFactor::Keyword {
                        tier: tier.tier,
                        keyword: keyword.clone(),
                    },
                    weight: tier.weight,
                    notes: format!("matched {} keyword \"{}\"", tier.tier, keyword),
                });
                total += tier.weight;
            }
        }
    }

    (components, total)
}

/// Every bonus whose threshold is strictly exceeded applies; tiers stack.
pub(crate) fn score_engagement(
    engagement: u64,
    bonuses: &[EngagementBonus],
) -> (Vec<ScoreComponent>, f64) {
    let mut components = Vec::new();
    let mut total = 0.0;

    for bonus in bonuses {
        if engagement > bonus.above {
            components.push(ScoreComponent {
                factor: ScoreFactor::Engagement { above: bonus.above },
                weight: bonus.bonus,
                notes: format!("engagement {engagement} above {}", bonus.above),
            });
            total += bonus.bonus;
        }
    }

    (components, total)
}

pub(crate) fn categorize(score: f64, hot_threshold: f64, warm_threshold: f64) -> LeadCategory {
    if score >= hot_threshold {
        LeadCategory::Hot
    } else if score >= warm_threshold {
        LeadCategory::Warm
    } else {
        LeadCategory::Cold
    }
}
