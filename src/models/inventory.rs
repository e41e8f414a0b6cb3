//! Inventory oversight models

use serde::Serialize;
use utoipa::ToSchema;

/// Collection-wide item counts
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryStats {
    pub total_items: i64,
    pub available: i64,
    pub checked_out: i64,
    /// Missing or lost items
    pub missing: i64,
}

/// One recent inventory activity entry
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InventoryActivity {
    pub action: String,
    pub location: String,
    /// Relative display time, e.g. "2 hours ago"
    pub time: String,
    /// Staff member or system that performed the action
    pub user: String,
}
