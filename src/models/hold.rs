//! Hold queue models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Processing status of a hold request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HoldStatus {
    Available,
    InTransit,
    Pending,
    Expired,
}

/// Library branch handling hold pickups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    Main,
    Science,
    Engineering,
}

impl Branch {
    pub fn label(&self) -> &'static str {
        match self {
            Branch::Main => "Main Library",
            Branch::Science => "Science Library",
            Branch::Engineering => "Engineering Library",
        }
    }
}

/// One entry in the hold queue
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HoldRequest {
    /// Queue position number
    pub id: i64,
    pub patron: String,
    pub patron_id: String,
    /// Patron category, e.g. "Faculty" or "Graduate Student"
    pub patron_type: String,
    pub item_title: String,
    pub item_authors: String,
    pub call_number: String,
    pub barcode: String,
    pub request_date: NaiveDate,
    /// Days the request has been waiting
    pub wait_days: i64,
    pub pickup_branch: Branch,
    /// Date the hold expires if not picked up
    pub expires: NaiveDate,
    pub status: HoldStatus,
    /// Flagged for staff attention
    pub needs_attention: bool,
}

/// Queue-wide counters
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HoldQueueStats {
    pub total: i64,
    pub available: i64,
    pub in_transit: i64,
    pub expired: i64,
}

/// Hold counts for one branch
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BranchHolds {
    pub branch: Branch,
    /// Branch display name
    pub label: String,
    pub holds: i64,
    pub available: i64,
    pub pending: i64,
}
