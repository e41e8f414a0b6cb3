//! Missing items endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::missing_item::{MissingItem, MissingStatus, Severity};

/// Query parameters for the missing items listing
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct MissingItemsQuery {
    /// Filter by severity
    pub severity: Option<Severity>,
    /// Filter by search status
    pub status: Option<MissingStatus>,
}

/// Totals over the missing items list
#[derive(Serialize, ToSchema)]
pub struct MissingItemsOverview {
    /// Number of items currently unaccounted for
    pub total_missing: i64,
    /// Items with an active search underway
    pub searching: i64,
    /// Items with a replacement copy on order
    pub replacements_ordered: i64,
    /// Combined replacement cost of all missing items
    pub total_value: i64,
}

/// List missing items
#[utoipa::path(
    get,
    path = "/missing-items",
    tag = "missing-items",
    params(MissingItemsQuery),
    responses(
        (status = 200, description = "Missing items", body = Vec<MissingItem>)
    )
)]
pub async fn list_missing_items(
    State(state): State<crate::AppState>,
    Query(query): Query<MissingItemsQuery>,
) -> Json<Vec<MissingItem>> {
    Json(state.services.missing_items.list(query.severity, query.status))
}

/// Get missing items overview
#[utoipa::path(
    get,
    path = "/missing-items/overview",
    tag = "missing-items",
    responses(
        (status = 200, description = "Missing items totals", body = MissingItemsOverview)
    )
)]
pub async fn missing_items_overview(
    State(state): State<crate::AppState>,
) -> Json<MissingItemsOverview> {
    Json(state.services.missing_items.overview())
}
