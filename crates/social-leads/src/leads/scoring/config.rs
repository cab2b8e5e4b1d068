use serde::{Deserialize, Serialize};

use super::super::domain::LeadCategory;

/// Keyword group contributing a fixed weight per matched term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordTier {
    pub tier: LeadCategory,
    pub weight: f64,
    pub keywords: Vec<String>,
}

/// Bonus added when engagement strictly exceeds `above`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementBonus {
    pub above: u64,
    pub bonus: f64,
}

/// Rubric describing keyword weights, engagement tiers, and category cut-offs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub keyword_tiers: Vec<KeywordTier>,
    pub engagement_bonuses: Vec<EngagementBonus>,
    pub hot_threshold: f64,
    pub warm_threshold: f64,
}

impl ScoringConfig {
    pub fn standard() -> Self {
        Self {
            keyword_tiers: vec![
                KeywordTier {
                    tier: LeadCategory::Hot,
                    weight: 3.0,
                    keywords: terms(&[
                        "urgent",
                        "asap",
                        "immediate",
                        "need now",
                        "looking for",
                        "hiring",
                        "budget approved",
                        "ready to buy",
                    ]),
                },
                KeywordTier {
                    tier: LeadCategory::Warm,
                    weight: 2.0,
                    keywords: terms(&[
                        "interested",
                        "considering",
                        "planning",
                        "researching",
                        "exploring",
                        "thinking about",
                    ]),
                },
                KeywordTier {
                    tier: LeadCategory::Cold,
                    weight: -1.0,
                    keywords: terms(&["maybe", "someday", "future", "not sure", "just looking"]),
                },
            ],
            engagement_bonuses: vec![
                EngagementBonus {
                    above: 1000,
                    bonus: 1.0,
                },
                EngagementBonus {
                    above: 500,
                    bonus: 0.5,
                },
            ],
            hot_threshold: 4.0,
            warm_threshold: 2.0,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}

fn terms(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
