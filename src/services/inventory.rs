//! Inventory management service

use chrono::Utc;

use crate::{
    api::inventory::InventoryOverview,
    models::inventory::{InventoryActivity, InventoryStats},
};

#[derive(Clone)]
pub struct InventoryService {
    stats: InventoryStats,
    activity: Vec<InventoryActivity>,
}

impl InventoryService {
    pub fn new() -> Self {
        Self {
            stats: InventoryStats {
                total_items: 125_847,
                available: 89_234,
                checked_out: 32_156,
                missing: 458,
            },
            activity: seed_activity(),
        }
    }

    /// Collection-wide inventory counters
    pub fn overview(&self) -> InventoryOverview {
        InventoryOverview {
            stats: self.stats.clone(),
            generated_at: Utc::now(),
        }
    }

    /// Recent inventory actions, newest first
    pub fn activity(&self) -> Vec<InventoryActivity> {
        self.activity.clone()
    }
}

fn seed_activity() -> Vec<InventoryActivity> {
    vec![
        InventoryActivity {
            action: "Shelf audit completed".to_string(),
            location: "Science Library - Floor 2".to_string(),
            time: "2 hours ago".to_string(),
            user: "Raj Kumar".to_string(),
        },
        InventoryActivity {
            action: "15 items marked as missing".to_string(),
            location: "Main Library".to_string(),
            time: "4 hours ago".to_string(),
            user: "System".to_string(),
        },
        InventoryActivity {
            action: "Weeding process initiated".to_string(),
            location: "Engineering Library".to_string(),
            time: "Yesterday".to_string(),
            user: "Anita Verma".to_string(),
        },
        InventoryActivity {
            action: "Collection analysis exported".to_string(),
            location: "All Branches".to_string(),
            time: "2 days ago".to_string(),
            user: "Priya Sharma".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_counters() {
        let service = InventoryService::new();
        let overview = service.overview();
        assert_eq!(overview.stats.total_items, 125_847);
        assert_eq!(overview.stats.available, 89_234);
        assert_eq!(overview.stats.checked_out, 32_156);
        assert_eq!(overview.stats.missing, 458);
    }

    #[test]
    fn test_activity_feed_order() {
        let service = InventoryService::new();
        let activity = service.activity();
        assert_eq!(activity.len(), 4);
        assert_eq!(activity[0].action, "Shelf audit completed");
        assert_eq!(activity[3].user, "Priya Sharma");
    }
}
