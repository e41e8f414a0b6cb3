//! Missing items service

use crate::{
    api::missing_items::MissingItemsOverview,
    error::AppResult,
    models::missing_item::{MissingItem, MissingStatus, Severity},
};

use super::seed_date;

#[derive(Clone)]
pub struct MissingItemsService {
    items: Vec<MissingItem>,
}

impl MissingItemsService {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            items: seed_items()?,
        })
    }

    /// List missing items, optionally filtered by severity and status
    pub fn list(&self, severity: Option<Severity>, status: Option<MissingStatus>) -> Vec<MissingItem> {
        self.items
            .iter()
            .filter(|item| severity.map_or(true, |severity| item.severity == severity))
            .filter(|item| status.map_or(true, |status| item.status == status))
            .cloned()
            .collect()
    }

    /// Totals computed over the current missing list
    pub fn overview(&self) -> MissingItemsOverview {
        MissingItemsOverview {
            total_missing: self.items.len() as i64,
            searching: self.count_with_status(MissingStatus::Searching),
            replacements_ordered: self.count_with_status(MissingStatus::ReplacementOrdered),
            total_value: self.items.iter().map(|item| item.replacement_cost).sum(),
        }
    }

    fn count_with_status(&self, status: MissingStatus) -> i64 {
        self.items
            .iter()
            .filter(|item| item.status == status)
            .count() as i64
    }
}

fn seed_items() -> AppResult<Vec<MissingItem>> {
    Ok(vec![
        MissingItem {
            title: "Advanced Database Systems".to_string(),
            author: "Garcia, Maria".to_string(),
            call_number: "005.74 GAR".to_string(),
            barcode: "123456789012".to_string(),
            last_seen: seed_date(2024, 8, 15)?,
            status: MissingStatus::Missing,
            days_lost: 38,
            severity: Severity::Medium,
            replacement_cost: 4500,
            search_attempts: 3,
        },
        MissingItem {
            title: "Organic Chemistry Handbook".to_string(),
            author: "Brown, Robert".to_string(),
            call_number: "547 BRO".to_string(),
            barcode: "123456789013".to_string(),
            last_seen: seed_date(2024, 7, 22)?,
            status: MissingStatus::Searching,
            days_lost: 62,
            severity: Severity::Medium,
            replacement_cost: 6800,
            search_attempts: 5,
        },
        MissingItem {
            title: "Modern Physics Concepts".to_string(),
            author: "Thompson, Lisa".to_string(),
            call_number: "530 THO".to_string(),
            barcode: "123456789014".to_string(),
            last_seen: seed_date(2024, 6, 10)?,
            status: MissingStatus::ReplacementOrdered,
            days_lost: 105,
            severity: Severity::High,
            replacement_cost: 5200,
            search_attempts: 7,
        },
        MissingItem {
            title: "Statistical Analysis Methods".to_string(),
            author: "Kumar, Raj".to_string(),
            call_number: "519.5 KUM".to_string(),
            barcode: "123456789015".to_string(),
            last_seen: seed_date(2024, 5, 28)?,
            status: MissingStatus::Lost,
            days_lost: 118,
            severity: Severity::High,
            replacement_cost: 3900,
            search_attempts: 8,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_filters() {
        let service = MissingItemsService::new().unwrap();
        assert_eq!(service.list(None, None).len(), 4);

        let high = service.list(Some(Severity::High), None);
        assert_eq!(high.len(), 2);
        assert!(high.iter().all(|item| item.severity == Severity::High));

        let searching = service.list(None, Some(MissingStatus::Searching));
        assert_eq!(searching.len(), 1);
        assert_eq!(searching[0].title, "Organic Chemistry Handbook");

        let both = service.list(Some(Severity::Low), Some(MissingStatus::Lost));
        assert!(both.is_empty());
    }

    #[test]
    fn test_overview_totals_come_from_the_list() {
        let service = MissingItemsService::new().unwrap();
        let overview = service.overview();
        assert_eq!(overview.total_missing, 4);
        assert_eq!(overview.searching, 1);
        assert_eq!(overview.replacements_ordered, 1);
        assert_eq!(overview.total_value, 20_400);
    }
}
