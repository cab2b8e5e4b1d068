use serde::{Deserialize, Serialize};

use super::domain::SocialPost;
use super::filter::{DateRange, EngagementLevel, PlatformFilter};

/// Supplies the ordered, in-memory post list the views are computed from.
pub trait LeadSource: Send + Sync {
    fn posts(&self) -> Result<Vec<SocialPost>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("lead source unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for user-triggered actions. Implementations record the request and report
/// success; nothing is exported, scraped, or saved.
pub trait ActionPublisher: Send + Sync {
    fn publish(&self, action: LeadAction) -> Result<ActionReceipt, ActionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Parameters of the search form that would start a new scrape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeRequest {
    pub keywords: String,
    pub location: String,
    pub platform: PlatformFilter,
    pub date_range: DateRange,
    pub engagement_level: EngagementLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LeadAction {
    Export { format: ExportFormat },
    StartScrape { request: ScrapeRequest },
    SaveSettings { section: String },
    OpenProfile { profile_url: String },
}

impl LeadAction {
    pub const fn name(&self) -> &'static str {
        match self {
            LeadAction::Export { .. } => "export",
            LeadAction::StartScrape { .. } => "start_scrape",
            LeadAction::SaveSettings { .. } => "save_settings",
            LeadAction::OpenProfile { .. } => "open_profile",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            LeadAction::Export { format } => {
                let format = match format {
                    ExportFormat::Csv => "CSV",
                    ExportFormat::Json => "JSON",
                };
                format!("export requested as {format}")
            }
            LeadAction::StartScrape { request } => {
                if request.keywords.trim().is_empty() {
                    "scrape requested with no keywords".to_string()
                } else {
                    format!("scrape requested for '{}'", request.keywords.trim())
                }
            }
            LeadAction::SaveSettings { section } => format!("settings saved for {section}"),
            LeadAction::OpenProfile { profile_url } => format!("profile opened: {profile_url}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReceipt {
    pub action: String,
    pub accepted: bool,
    pub message: String,
}

impl ActionReceipt {
    pub fn accepted(action: &LeadAction) -> Self {
        Self {
            action: action.name().to_string(),
            accepted: true,
            message: action.describe(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("action transport unavailable: {0}")]
    Transport(String),
}
