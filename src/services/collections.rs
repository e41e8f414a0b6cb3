//! Collection analysis service

use crate::{
    api::collections::{BrowseHighlights, CollectionAnalysisResponse},
    models::collection::{
        CollectionCategory, CollectionSummary, ConditionBreakdown, FeaturedCollection,
    },
};

#[derive(Clone)]
pub struct CollectionsService {
    categories: Vec<CollectionCategory>,
    summary: CollectionSummary,
    popular_searches: Vec<String>,
    featured: Vec<FeaturedCollection>,
}

impl CollectionsService {
    pub fn new() -> Self {
        Self {
            categories: seed_categories(),
            summary: CollectionSummary {
                collection_value: 4_567_890,
                avg_circulation_rate: 3.2,
                space_utilization_percent: 78,
            },
            popular_searches: [
                "Computer Science",
                "Data Structures",
                "Machine Learning",
                "Web Development",
                "Database Systems",
                "Software Engineering",
                "Artificial Intelligence",
                "Algorithms",
            ]
            .iter()
            .map(|term| term.to_string())
            .collect(),
            featured: vec![
                FeaturedCollection {
                    title: "New Arrivals".to_string(),
                    item_count: 234,
                },
                FeaturedCollection {
                    title: "Popular Books".to_string(),
                    item_count: 156,
                },
                FeaturedCollection {
                    title: "E-Resources".to_string(),
                    item_count: 1234,
                },
                FeaturedCollection {
                    title: "Research Papers".to_string(),
                    item_count: 567,
                },
            ],
        }
    }

    /// Per-category analysis with collection-wide summary figures
    pub fn analysis(&self) -> CollectionAnalysisResponse {
        CollectionAnalysisResponse {
            summary: self.summary.clone(),
            categories: self.categories.clone(),
        }
    }

    /// Browse highlights: popular search terms and featured collections
    pub fn highlights(&self) -> BrowseHighlights {
        BrowseHighlights {
            popular_searches: self.popular_searches.clone(),
            collections: self.featured.clone(),
        }
    }
}

fn seed_categories() -> Vec<CollectionCategory> {
    vec![
        CollectionCategory {
            name: "Computer Science".to_string(),
            call_number_range: "004-006".to_string(),
            total_items: 2847,
            available: 1923,
            checked_out: 824,
            missing: 15,
            avg_age_years: 8.2,
            circulation_rate: 4.7,
            condition: ConditionBreakdown {
                good: 60,
                fair: 30,
                poor: 10,
            },
        },
        CollectionCategory {
            name: "Mathematics".to_string(),
            call_number_range: "510-519".to_string(),
            total_items: 1654,
            available: 1234,
            checked_out: 398,
            missing: 8,
            avg_age_years: 12.5,
            circulation_rate: 2.3,
            condition: ConditionBreakdown {
                good: 50,
                fair: 35,
                poor: 15,
            },
        },
        CollectionCategory {
            name: "Physics".to_string(),
            call_number_range: "530-539".to_string(),
            total_items: 1289,
            available: 967,
            checked_out: 298,
            missing: 12,
            avg_age_years: 15.1,
            circulation_rate: 1.8,
            condition: ConditionBreakdown {
                good: 45,
                fair: 40,
                poor: 15,
            },
        },
        CollectionCategory {
            name: "Literature".to_string(),
            call_number_range: "800-899".to_string(),
            total_items: 3456,
            available: 2789,
            checked_out: 634,
            missing: 23,
            avg_age_years: 18.7,
            circulation_rate: 3.2,
            condition: ConditionBreakdown {
                good: 55,
                fair: 30,
                poor: 15,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_reports_categories_in_order() {
        let service = CollectionsService::new();
        let analysis = service.analysis();
        assert_eq!(analysis.categories.len(), 4);
        assert_eq!(analysis.categories[0].name, "Computer Science");
        assert_eq!(analysis.categories[3].name, "Literature");
        assert_eq!(analysis.summary.collection_value, 4_567_890);
        assert_eq!(analysis.summary.space_utilization_percent, 78);
    }

    #[test]
    fn test_condition_percentages_sum_to_whole() {
        let service = CollectionsService::new();
        for category in service.analysis().categories {
            let condition = category.condition;
            assert_eq!(condition.good + condition.fair + condition.poor, 100);
        }
    }

    #[test]
    fn test_highlights() {
        let service = CollectionsService::new();
        let highlights = service.highlights();
        assert_eq!(highlights.popular_searches.len(), 8);
        assert_eq!(highlights.popular_searches[0], "Computer Science");
        assert_eq!(highlights.collections.len(), 4);
        assert_eq!(highlights.collections[0].title, "New Arrivals");
        assert_eq!(highlights.collections[2].item_count, 1234);
    }
}
