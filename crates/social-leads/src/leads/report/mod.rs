mod summary;
pub mod views;

pub use summary::{CategoryBreakdown, LeadOverview};
