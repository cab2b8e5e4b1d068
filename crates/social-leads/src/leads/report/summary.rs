use super::super::filter::same_platform;
use super::super::domain::{LeadCategory, ScoredLead};
use super::views::{CategoryCard, CategoryDetailView, LeadOverviewView, LeadView, PlatformCount};

/// Leads partitioned by category. Each bucket keeps the input order.
#[derive(Debug, Default, Clone)]
pub struct CategoryBreakdown {
    pub hot: Vec<ScoredLead>,
    pub warm: Vec<ScoredLead>,
    pub cold: Vec<ScoredLead>,
}

impl CategoryBreakdown {
    pub fn partition(leads: impl IntoIterator<Item = ScoredLead>) -> Self {
        let mut breakdown = Self::default();
        for lead in leads {
            match lead.assessment.category {
                LeadCategory::Hot => breakdown.hot.push(lead),
                LeadCategory::Warm => breakdown.warm.push(lead),
                LeadCategory::Cold => breakdown.cold.push(lead),
            }
        }
        breakdown
    }

    pub fn bucket(&self, category: LeadCategory) -> &[ScoredLead] {
        match category {
            LeadCategory::Hot => &self.hot,
            LeadCategory::Warm => &self.warm,
            LeadCategory::Cold => &self.cold,
        }
    }

    pub fn total(&self) -> usize {
        self.hot.len() + self.warm.len() + self.cold.len()
    }

    pub fn card(&self, category: LeadCategory) -> CategoryCard {
        CategoryCard {
            category,
            label: category.label(),
            description: category.description(),
            count: self.bucket(category).len(),
        }
    }

    pub fn cards(&self) -> Vec<CategoryCard> {
        LeadCategory::ordered()
            .into_iter()
            .map(|category| self.card(category))
            .collect()
    }

    pub fn detail(&self, category: LeadCategory) -> CategoryDetailView {
        CategoryDetailView {
            card: self.card(category),
            leads: self.bucket(category).iter().map(LeadView::from).collect(),
        }
    }
}

/// Headline numbers for the dashboard cards.
#[derive(Debug, Default, Clone)]
pub struct LeadOverview {
    pub total_leads: usize,
    pub per_category: [usize; 3],
    pub total_engagement: u128,
    /// Platform counts keyed by the first spelling seen, in first-seen order.
    pub platforms: Vec<(String, usize)>,
}

impl LeadOverview {
    pub fn from_leads(leads: &[ScoredLead]) -> Self {
        let mut overview = Self::default();
        for lead in leads {
            overview.total_leads += 1;
            overview.total_engagement += u128::from(lead.post.engagement_count);
            let slot = match lead.assessment.category {
                LeadCategory::Hot => 0,
                LeadCategory::Warm => 1,
                LeadCategory::Cold => 2,
            };
            overview.per_category[slot] += 1;

            let platform = &lead.post.platform;
            match overview
                .platforms
                .iter_mut()
                .find(|(name, _)| same_platform(name, platform))
            {
                Some((_, count)) => *count += 1,
                None => overview.platforms.push((platform.clone(), 1)),
            }
        }
        overview
    }

    pub fn count(&self, category: LeadCategory) -> usize {
        match category {
            LeadCategory::Hot => self.per_category[0],
            LeadCategory::Warm => self.per_category[1],
            LeadCategory::Cold => self.per_category[2],
        }
    }

    pub fn hot_share(&self) -> f64 {
        if self.total_leads == 0 {
            return 0.0;
        }
        self.count(LeadCategory::Hot) as f64 / self.total_leads as f64
    }

    pub fn average_engagement(&self) -> f64 {
        if self.total_leads == 0 {
            return 0.0;
        }
        self.total_engagement as f64 / self.total_leads as f64
    }

    pub fn to_view(&self) -> LeadOverviewView {
        LeadOverviewView {
            total_leads: self.total_leads,
            hot_leads: self.count(LeadCategory::Hot),
            warm_leads: self.count(LeadCategory::Warm),
            cold_leads: self.count(LeadCategory::Cold),
            hot_share_pct: (self.hot_share() * 1000.0).round() / 10.0,
            average_engagement: (self.average_engagement() * 10.0).round() / 10.0,
            platforms: self
                .platforms
                .iter()
                .map(|(platform, leads)| PlatformCount {
                    platform: platform.clone(),
                    leads: *leads,
                })
                .collect(),
        }
    }
}
