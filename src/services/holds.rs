//! Hold queue service

use crate::{
    api::holds::HoldQueueOverview,
    error::AppResult,
    models::hold::{Branch, BranchHolds, HoldQueueStats, HoldRequest, HoldStatus},
};

use super::seed_date;

#[derive(Clone)]
pub struct HoldsService {
    holds: Vec<HoldRequest>,
    stats: HoldQueueStats,
    branches: Vec<BranchHolds>,
}

impl HoldsService {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            holds: seed_holds()?,
            stats: HoldQueueStats {
                total: 124,
                available: 21,
                in_transit: 15,
                expired: 6,
            },
            branches: vec![
                BranchHolds {
                    branch: Branch::Main,
                    label: Branch::Main.label().to_string(),
                    holds: 45,
                    available: 12,
                    pending: 3,
                },
                BranchHolds {
                    branch: Branch::Science,
                    label: Branch::Science.label().to_string(),
                    holds: 28,
                    available: 8,
                    pending: 1,
                },
            ],
        })
    }

    /// List hold requests, optionally filtered by status and pickup branch
    pub fn list(&self, status: Option<HoldStatus>, branch: Option<Branch>) -> Vec<HoldRequest> {
        self.holds
            .iter()
            .filter(|hold| status.map_or(true, |status| hold.status == status))
            .filter(|hold| branch.map_or(true, |branch| hold.pickup_branch == branch))
            .cloned()
            .collect()
    }

    /// Queue-wide counters and the per-branch breakdown
    pub fn overview(&self) -> HoldQueueOverview {
        HoldQueueOverview {
            stats: self.stats.clone(),
            branches: self.branches.clone(),
        }
    }
}

fn seed_holds() -> AppResult<Vec<HoldRequest>> {
    Ok(vec![
        HoldRequest {
            id: 1,
            patron: "Rahul Kumar".to_string(),
            patron_id: "STU001234".to_string(),
            patron_type: "Graduate Student".to_string(),
            item_title: "Advanced Database Systems".to_string(),
            item_authors: "Ramakrishnan, Raghu".to_string(),
            call_number: "QA76.9.D3 R36 2019".to_string(),
            barcode: "BK001234567".to_string(),
            request_date: seed_date(2025, 1, 15)?,
            wait_days: 254,
            pickup_branch: Branch::Main,
            expires: seed_date(2025, 2, 16)?,
            status: HoldStatus::Available,
            needs_attention: false,
        },
        HoldRequest {
            id: 2,
            patron: "Anita Singh".to_string(),
            patron_id: "STU002345".to_string(),
            patron_type: "Faculty".to_string(),
            item_title: "Organic Chemistry: Structure and Function".to_string(),
            item_authors: "Vollhardt, K. Peter C.".to_string(),
            call_number: "QD251.2 V65 2018".to_string(),
            barcode: "BK002345678".to_string(),
            request_date: seed_date(2025, 1, 16)?,
            wait_days: 253,
            pickup_branch: Branch::Science,
            expires: seed_date(2025, 2, 17)?,
            status: HoldStatus::InTransit,
            needs_attention: true,
        },
        HoldRequest {
            id: 3,
            patron: "Vikram Patel".to_string(),
            patron_id: "STU003456".to_string(),
            patron_type: "Undergraduate".to_string(),
            item_title: "Introduction to Algorithms".to_string(),
            item_authors: "Cormen, Thomas H.".to_string(),
            call_number: "QA76.6 C662 2022".to_string(),
            barcode: "BK003456789".to_string(),
            request_date: seed_date(2025, 1, 17)?,
            wait_days: 252,
            pickup_branch: Branch::Engineering,
            expires: seed_date(2025, 2, 18)?,
            status: HoldStatus::Pending,
            needs_attention: false,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_unfiltered_returns_queue_order() {
        let service = HoldsService::new().unwrap();
        let holds = service.list(None, None);
        assert_eq!(holds.len(), 3);
        assert_eq!(holds[0].patron, "Rahul Kumar");
        assert_eq!(holds[2].patron, "Vikram Patel");
    }

    #[test]
    fn test_list_filters_by_status_and_branch() {
        let service = HoldsService::new().unwrap();

        let in_transit = service.list(Some(HoldStatus::InTransit), None);
        assert_eq!(in_transit.len(), 1);
        assert_eq!(in_transit[0].patron, "Anita Singh");
        assert!(in_transit[0].needs_attention);

        let science = service.list(None, Some(Branch::Science));
        assert_eq!(science.len(), 1);
        assert_eq!(science[0].pickup_branch, Branch::Science);

        let none = service.list(Some(HoldStatus::Expired), Some(Branch::Main));
        assert!(none.is_empty());
    }

    #[test]
    fn test_overview_reports_queue_counters() {
        let service = HoldsService::new().unwrap();
        let overview = service.overview();
        assert_eq!(overview.stats.total, 124);
        assert_eq!(overview.stats.available, 21);
        assert_eq!(overview.branches.len(), 2);
        assert_eq!(overview.branches[0].label, "Main Library");
    }
}
