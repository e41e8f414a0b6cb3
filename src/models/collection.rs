//! Collection analysis and browsing models

use serde::Serialize;
use utoipa::ToSchema;

/// Physical condition split of a category, as percentages summing to 100
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConditionBreakdown {
    pub good: i64,
    pub fair: i64,
    pub poor: i64,
}

/// One analyzed collection category
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CollectionCategory {
    pub name: String,
    /// Dewey call-number range covered by the category, e.g. "004-006"
    pub call_number_range: String,
    pub total_items: i64,
    pub available: i64,
    pub checked_out: i64,
    pub missing: i64,
    /// Average item age in years
    pub avg_age_years: f64,
    /// Checkouts per item per year
    pub circulation_rate: f64,
    pub condition: ConditionBreakdown,
}

/// Collection-wide figures shown above the category table
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CollectionSummary {
    /// Estimated value of the collection in currency-agnostic units
    pub collection_value: i64,
    pub avg_circulation_rate: f64,
    pub space_utilization_percent: i64,
}

/// Featured collection tile on the catalog-search landing page
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeaturedCollection {
    pub title: String,
    pub item_count: i64,
}
