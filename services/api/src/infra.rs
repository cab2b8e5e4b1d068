use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use social_leads::error::AppError;
use social_leads::leads::import::parse_timestamp;
use social_leads::leads::sample::sample_posts;
use social_leads::leads::{
    ActionError, ActionPublisher, ActionReceipt, DateRange, EngagementLevel, LeadAction,
    LeadCategory, LeadImporter, LeadSource, SocialPost, SourceError,
};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Clone)]
pub(crate) struct InMemoryLeadSource {
    posts: Arc<[SocialPost]>,
}

impl InMemoryLeadSource {
    pub(crate) fn new(posts: Vec<SocialPost>) -> Self {
        Self {
            posts: posts.into(),
        }
    }
}

impl LeadSource for InMemoryLeadSource {
    fn posts(&self) -> Result<Vec<SocialPost>, SourceError> {
        Ok(self.posts.to_vec())
    }
}

/// Accepts every action, logs it, and keeps a copy for inspection.
#[derive(Default, Clone)]
pub(crate) struct LoggingActionPublisher {
    events: Arc<Mutex<Vec<LeadAction>>>,
}

impl ActionPublisher for LoggingActionPublisher {
    fn publish(&self, action: LeadAction) -> Result<ActionReceipt, ActionError> {
        let receipt = ActionReceipt::accepted(&action);
        tracing::info!(action = action.name(), message = %receipt.message, "lead action accepted");
        self.events
            .lock()
            .map_err(|_| ActionError::Transport("action log lock poisoned".to_string()))?
            .push(action);
        Ok(receipt)
    }
}

impl LoggingActionPublisher {
    pub(crate) fn events(&self) -> Vec<LeadAction> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

/// Reads the dataset when one is given, otherwise falls back to the bundled sample posts.
pub(crate) fn load_posts(dataset: Option<&Path>) -> Result<(Vec<SocialPost>, bool), AppError> {
    match dataset {
        Some(path) => LeadImporter::from_path(path)
            .map(|posts| (posts, true))
            .map_err(AppError::from),
        None => Ok((sample_posts(), false)),
    }
}

pub(crate) fn parse_instant(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(raw)
        .ok_or_else(|| format!("failed to parse '{raw}' as RFC 3339 or YYYY-MM-DD"))
}

pub(crate) fn parse_category(raw: &str) -> Result<LeadCategory, String> {
    raw.parse::<LeadCategory>().map_err(|err| err.to_string())
}

pub(crate) fn parse_engagement_level(raw: &str) -> Result<EngagementLevel, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(EngagementLevel::All),
        "high" => Ok(EngagementLevel::High),
        "medium" => Ok(EngagementLevel::Medium),
        "low" => Ok(EngagementLevel::Low),
        _ => Err(format!(
            "unknown engagement level '{raw}' (expected all, high, medium, or low)"
        )),
    }
}

pub(crate) fn parse_date_range(raw: &str) -> Result<DateRange, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1d" => Ok(DateRange::LastDay),
        "7d" => Ok(DateRange::LastWeek),
        "30d" => Ok(DateRange::LastMonth),
        "90d" => Ok(DateRange::LastQuarter),
        "all" => Ok(DateRange::AllTime),
        _ => Err(format!(
            "unknown date range '{raw}' (expected 1d, 7d, 30d, 90d, or all)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use social_leads::leads::ExportFormat;

    #[test]
    fn filter_arguments_parse_case_insensitively() {
        assert_eq!(parse_engagement_level("HIGH"), Ok(EngagementLevel::High));
        assert_eq!(parse_date_range(" 30D "), Ok(DateRange::LastMonth));
        assert_eq!(parse_category("Cold"), Ok(LeadCategory::Cold));
        assert!(parse_date_range("fortnight").is_err());
        assert!(parse_engagement_level("viral").is_err());
    }

    #[test]
    fn publisher_keeps_a_log_of_actions() {
        let publisher = LoggingActionPublisher::default();
        let receipt = publisher
            .publish(LeadAction::Export {
                format: ExportFormat::Json,
            })
            .expect("export accepted");

        assert!(receipt.accepted);
        assert_eq!(publisher.events().len(), 1);
    }

    #[test]
    fn in_memory_source_serves_loaded_posts_to_every_clone() {
        let source = InMemoryLeadSource::new(sample_posts());
        let shared = source.clone();

        let first = source.posts().expect("posts available");
        let second = shared.posts().expect("posts available");
        assert_eq!(first.len(), 7);
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&source.posts, &shared.posts));
    }

    #[test]
    fn load_posts_defaults_to_sample_data() {
        let (posts, imported) = load_posts(None).expect("sample posts load");
        assert!(!imported);
        assert_eq!(posts.len(), 7);
    }
}
