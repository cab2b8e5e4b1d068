use crate::infra::{
    load_posts, parse_category, parse_date_range, parse_engagement_level, parse_instant,
    InMemoryLeadSource, LoggingActionPublisher,
};
use chrono::{DateTime, Utc};
use clap::Args;
use social_leads::config::DEFAULT_PAGE_SIZE;
use social_leads::error::AppError;
use social_leads::leads::report::views::{
    CategoryCard, CategoryDetailView, LeadOverviewView, LeadTablePage,
};
use social_leads::leads::{
    coerce_engagement, DateRange, EngagementLevel, ExportFormat, LeadAction, LeadCategory,
    LeadDeskService, LeadQuery, LeadScorer, PageRequest, PlatformFilter, ScoreBreakdown,
    ScoreFactor, ScoringConfig, ScrapeRequest,
};
use std::path::PathBuf;
use std::sync::Arc;

type CliLeadService = LeadDeskService<InMemoryLeadSource, LoggingActionPublisher>;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Post or comment text to score
    #[arg(long)]
    pub(crate) content: String,
    /// Likes, shares, and comments combined; negative or fractional values are coerced
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub(crate) engagement: f64,
}

#[derive(Args, Debug)]
pub(crate) struct LeadTableArgs {
    /// CSV or JSON dataset to load instead of the bundled sample posts
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Case-insensitive text matched against username or content
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Platform name, or "all"
    #[arg(long, default_value = "all")]
    pub(crate) platform: String,
    /// all, high, medium, or low
    #[arg(long, value_parser = parse_engagement_level, default_value = "all")]
    pub(crate) engagement_level: EngagementLevel,
    /// 1d, 7d, 30d, 90d, or all
    #[arg(long, value_parser = parse_date_range, default_value = "all")]
    pub(crate) date_range: DateRange,
    /// Restrict to hot, warm, or cold leads
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<LeadCategory>,
    /// 1-based page number; out-of-range pages are clamped
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
    /// Rows per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub(crate) page_size: usize,
    /// Reference instant for the date range (defaults to now)
    #[arg(long, value_parser = parse_instant)]
    pub(crate) as_of: Option<DateTime<Utc>>,
}

#[derive(Args, Debug)]
pub(crate) struct CategoriesArgs {
    /// CSV or JSON dataset to load instead of the bundled sample posts
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Show the members of a single category
    #[arg(long, value_parser = parse_category)]
    pub(crate) category: Option<LeadCategory>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// CSV or JSON dataset to load instead of the bundled sample posts
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Reference instant for date filters (defaults to now)
    #[arg(long, value_parser = parse_instant)]
    pub(crate) as_of: Option<DateTime<Utc>>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let engagement = coerce_engagement(args.engagement);
    let breakdown = LeadScorer::standard().evaluate(&args.content, engagement);
    render_score(&args.content, engagement, &breakdown);
    Ok(())
}

pub(crate) fn run_lead_table(args: LeadTableArgs) -> Result<(), AppError> {
    let LeadTableArgs {
        dataset,
        search,
        platform,
        engagement_level,
        date_range,
        category,
        page,
        page_size,
        as_of,
    } = args;

    let (service, _, imported) = build_service(dataset, page_size)?;
    let query = LeadQuery {
        search,
        platform: PlatformFilter::from(platform),
        engagement_level,
        date_range,
        category,
    };
    let as_of = as_of.unwrap_or_else(Utc::now);
    let table = service.table(&query, PageRequest::new(page, page_size), as_of)?;

    render_data_source(imported);
    render_table(&table);
    Ok(())
}

pub(crate) fn run_categories(args: CategoriesArgs) -> Result<(), AppError> {
    let (service, _, imported) = build_service(args.dataset, DEFAULT_PAGE_SIZE)?;
    render_data_source(imported);

    match args.category {
        Some(category) => render_category_detail(&service.category_detail(category)?),
        None => render_category_cards(&service.categories()?),
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { dataset, as_of } = args;
    let as_of = as_of.unwrap_or_else(Utc::now);
    let (service, publisher, imported) = build_service(dataset, DEFAULT_PAGE_SIZE)?;

    println!("Social lead desk demo");
    render_data_source(imported);

    render_overview(&service.overview()?);
    render_category_cards(&service.categories()?);
    render_category_detail(&service.category_detail(LeadCategory::Hot)?);

    println!("\nHigh-engagement leads");
    let query = LeadQuery {
        engagement_level: EngagementLevel::High,
        ..LeadQuery::default()
    };
    render_table(&service.table(&query, PageRequest::first(5), as_of)?);

    println!();
    let sample = "We are hiring urgently, budget approved, ready to buy!";
    render_score(sample, 1200, &service.score(sample, 1200));

    println!("\nDashboard actions");
    let actions = vec![
        LeadAction::Export {
            format: ExportFormat::Csv,
        },
        LeadAction::StartScrape {
            request: ScrapeRequest {
                keywords: "crm migration".to_string(),
                location: "Austin, TX".to_string(),
                platform: PlatformFilter::from("LinkedIn"),
                date_range: DateRange::LastWeek,
                engagement_level: EngagementLevel::Medium,
            },
        },
        LeadAction::SaveSettings {
            section: "notifications".to_string(),
        },
    ];
    for action in actions {
        let receipt = service.dispatch(action)?;
        println!("- {}: {}", receipt.action, receipt.message);
    }
    println!("{} actions recorded", publisher.events().len());

    Ok(())
}

fn build_service(
    dataset: Option<PathBuf>,
    page_size: usize,
) -> Result<(CliLeadService, Arc<LoggingActionPublisher>, bool), AppError> {
    let (posts, imported) = load_posts(dataset.as_deref())?;
    let actions = Arc::new(LoggingActionPublisher::default());
    let service = LeadDeskService::new(
        Arc::new(InMemoryLeadSource::new(posts)),
        actions.clone(),
        ScoringConfig::standard(),
        page_size,
    );
    Ok((service, actions, imported))
}

fn render_data_source(imported: bool) {
    if imported {
        println!("Data source: imported dataset");
    } else {
        println!("Data source: bundled sample posts (no dataset provided)");
    }
}

fn render_score(content: &str, engagement: u64, breakdown: &ScoreBreakdown) {
    println!("Score for \"{}\" ({} engagements)", content, engagement);
    println!(
        "- {} | score {:.1} | urgency {:.1}",
        breakdown.assessment.category.label(),
        breakdown.assessment.score,
        breakdown.urgency_score()
    );
    if breakdown.components.is_empty() {
        println!("  No keywords or engagement bonuses matched");
        return;
    }
    for component in &breakdown.components {
        let source = match &component.factor {
            ScoreFactor::Keyword { tier, .. } => format!("{tier} keyword"),
            ScoreFactor::Engagement { .. } => "engagement".to_string(),
        };
        println!(
            "  {:+.1} {} ({})",
            component.weight, source, component.notes
        );
    }
}

fn render_overview(overview: &LeadOverviewView) {
    println!("\nOverview");
    println!(
        "- {} leads | {} hot / {} warm / {} cold | {:.1}% hot",
        overview.total_leads,
        overview.hot_leads,
        overview.warm_leads,
        overview.cold_leads,
        overview.hot_share_pct
    );
    println!("- Average engagement {:.1}", overview.average_engagement);
    println!("Platforms:");
    for entry in &overview.platforms {
        println!("  - {}: {} leads", entry.platform, entry.leads);
    }
}

fn render_category_cards(cards: &[CategoryCard]) {
    println!("\nLead categories");
    for card in cards {
        println!("- {}: {} ({})", card.label, card.count, card.description);
    }
}

fn render_category_detail(detail: &CategoryDetailView) {
    println!(
        "\n{} ({}) - {}",
        detail.card.label, detail.card.count, detail.card.description
    );
    if detail.leads.is_empty() {
        println!("  No leads in this category");
        return;
    }
    for lead in &detail.leads {
        println!(
            "  - @{} on {} | urgency {:.1} | {}",
            lead.username, lead.platform, lead.urgency_score, lead.content
        );
    }
}

fn render_table(table: &LeadTablePage) {
    println!(
        "Results: {} leads | page {} of {}",
        table.total_results,
        table.page,
        table.total_pages.max(1)
    );
    if table.rows.is_empty() {
        println!("  No leads match the current filters");
        return;
    }
    for row in &table.rows {
        let location = row.location.as_deref().unwrap_or("unknown location");
        println!(
            "- [{}] @{} ({}, {}) | {} | engagement {} | score {:.1} | {}",
            row.category,
            row.username,
            row.platform,
            row.post_kind.label(),
            location,
            row.engagement,
            row.urgency_score,
            row.timestamp.format("%Y-%m-%d %H:%M")
        );
        println!("    {}", row.content);
    }
}
