//! Lead scoring, result filtering, and category reporting for scraped social posts.
//!
//! `scoring` holds the only real algorithm; the remaining modules are thin views over an
//! in-memory post list supplied through [`LeadSource`].

pub mod domain;
pub mod filter;
pub mod import;
pub mod pagination;
pub mod report;
pub mod repository;
pub mod router;
pub mod sample;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    coerce_engagement, LeadAssessment, LeadCategory, PostId, PostKind, ScoredLead, SocialPost,
    UnknownCategory,
};
pub use filter::{
    matches_platform, matches_search, DateRange, EngagementLevel, LeadQuery, PlatformFilter,
};
pub use import::{LeadImportError, LeadImporter};
pub use pagination::{paginate, Page, PageRequest};
pub use report::{CategoryBreakdown, LeadOverview};
pub use repository::{
    ActionError, ActionPublisher, ActionReceipt, ExportFormat, LeadAction, LeadSource,
    ScrapeRequest, SourceError,
};
pub use router::lead_router;
pub use scoring::{LeadScorer, ScoreBreakdown, ScoreComponent, ScoreFactor, ScoringConfig};
pub use service::{LeadDeskService, LeadServiceError};
