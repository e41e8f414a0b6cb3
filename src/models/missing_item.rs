//! Missing item tracker models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tracking status of a missing item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MissingStatus {
    Missing,
    Searching,
    ReplacementOrdered,
    Lost,
}

/// Loss severity, driven by replacement difficulty and demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One tracked missing item
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MissingItem {
    pub title: String,
    pub author: String,
    pub call_number: String,
    pub barcode: String,
    /// Date the item was last confirmed on the shelf
    pub last_seen: NaiveDate,
    pub status: MissingStatus,
    pub days_lost: i64,
    pub severity: Severity,
    /// Replacement cost in currency-agnostic units
    pub replacement_cost: i64,
    pub search_attempts: i64,
}
