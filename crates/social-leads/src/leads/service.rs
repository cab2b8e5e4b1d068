use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::domain::{LeadCategory, ScoredLead};
use super::filter::LeadQuery;
use super::pagination::{paginate, PageRequest};
use super::report::views::{
    CategoryCard, CategoryDetailView, LeadOverviewView, LeadTablePage, LeadView,
};
use super::report::{CategoryBreakdown, LeadOverview};
use super::repository::{
    ActionError, ActionPublisher, ActionReceipt, LeadAction, LeadSource, SourceError,
};
use super::scoring::{LeadScorer, ScoreBreakdown, ScoringConfig};

/// Service composing the lead source, scorer, and action hooks behind the dashboard views.
pub struct LeadDeskService<S, A> {
    source: Arc<S>,
    actions: Arc<A>,
    scorer: Arc<LeadScorer>,
    page_size: usize,
}

impl<S, A> LeadDeskService<S, A>
where
    S: LeadSource + 'static,
    A: ActionPublisher + 'static,
{
    pub fn new(source: Arc<S>, actions: Arc<A>, config: ScoringConfig, page_size: usize) -> Self {
        Self {
            source,
            actions,
            scorer: Arc::new(LeadScorer::new(config)),
            page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn scorer(&self) -> &LeadScorer {
        &self.scorer
    }

    /// Score free text without touching the source.
    pub fn score(&self, content: &str, engagement: u64) -> ScoreBreakdown {
        self.scorer.evaluate(content, engagement)
    }

    /// Filter, score, and cut one page of the results table.
    pub fn table(
        &self,
        query: &LeadQuery,
        request: PageRequest,
        now: DateTime<Utc>,
    ) -> Result<LeadTablePage, LeadServiceError> {
        let posts = self.source.posts()?;
        let filtered = query.apply(&posts, &self.scorer, now);
        let page = paginate(filtered, request);

        tracing::debug!(
            search = %query.search,
            total = posts.len(),
            matched = page.total_items,
            page = page.page,
            "lead table query"
        );

        Ok(page.map(|lead| LeadView::from(&lead)).into())
    }

    pub fn categories(&self) -> Result<Vec<CategoryCard>, LeadServiceError> {
        Ok(self.breakdown()?.cards())
    }

    pub fn category_detail(
        &self,
        category: LeadCategory,
    ) -> Result<CategoryDetailView, LeadServiceError> {
        Ok(self.breakdown()?.detail(category))
    }

    pub fn overview(&self) -> Result<LeadOverviewView, LeadServiceError> {
        let leads = self.scored()?;
        Ok(LeadOverview::from_leads(&leads).to_view())
    }

    /// Hand a user action to the publisher and return its receipt.
    pub fn dispatch(&self, action: LeadAction) -> Result<ActionReceipt, LeadServiceError> {
        let name = action.name();
        let receipt = self.actions.publish(action)?;
        tracing::info!(action = name, accepted = receipt.accepted, "lead action dispatched");
        Ok(receipt)
    }

    fn scored(&self) -> Result<Vec<ScoredLead>, LeadServiceError> {
        let posts = self.source.posts()?;
        Ok(posts.iter().map(|post| self.scorer.score_post(post)).collect())
    }

    fn breakdown(&self) -> Result<CategoryBreakdown, LeadServiceError> {
        Ok(CategoryBreakdown::partition(self.scored()?))
    }
}

/// Error raised by the lead desk service.
#[derive(Debug, thiserror::Error)]
pub enum LeadServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Action(#[from] ActionError),
}
