//! Inventory management endpoints

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::inventory::{InventoryActivity, InventoryStats};

/// Inventory overview counters
#[derive(Serialize, ToSchema)]
pub struct InventoryOverview {
    /// Collection-wide counters
    pub stats: InventoryStats,
    /// When this snapshot was produced
    pub generated_at: DateTime<Utc>,
}

/// Get inventory overview
#[utoipa::path(
    get,
    path = "/inventory/overview",
    tag = "inventory",
    responses(
        (status = 200, description = "Inventory counters", body = InventoryOverview)
    )
)]
pub async fn inventory_overview(State(state): State<crate::AppState>) -> Json<InventoryOverview> {
    Json(state.services.inventory.overview())
}

/// Get recent inventory activity
#[utoipa::path(
    get,
    path = "/inventory/activity",
    tag = "inventory",
    responses(
        (status = 200, description = "Recent inventory actions, newest first", body = Vec<InventoryActivity>)
    )
)]
pub async fn inventory_activity(
    State(state): State<crate::AppState>,
) -> Json<Vec<InventoryActivity>> {
    Json(state.services.inventory.activity())
}
