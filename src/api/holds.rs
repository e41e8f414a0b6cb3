//! Hold queue endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::hold::{Branch, BranchHolds, HoldQueueStats, HoldRequest, HoldStatus};

/// Query parameters for the hold queue listing
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct HoldQueueQuery {
    /// Filter by hold status
    pub status: Option<HoldStatus>,
    /// Filter by pickup branch
    pub branch: Option<Branch>,
}

/// Queue-wide counters with the per-branch breakdown
#[derive(Serialize, ToSchema)]
pub struct HoldQueueOverview {
    /// Queue-wide counters
    pub stats: HoldQueueStats,
    /// Hold counts per branch
    pub branches: Vec<BranchHolds>,
}

/// List hold requests
#[utoipa::path(
    get,
    path = "/holds",
    tag = "holds",
    params(HoldQueueQuery),
    responses(
        (status = 200, description = "Hold requests in queue order", body = Vec<HoldRequest>)
    )
)]
pub async fn list_holds(
    State(state): State<crate::AppState>,
    Query(query): Query<HoldQueueQuery>,
) -> Json<Vec<HoldRequest>> {
    Json(state.services.holds.list(query.status, query.branch))
}

/// Get hold queue overview
#[utoipa::path(
    get,
    path = "/holds/overview",
    tag = "holds",
    responses(
        (status = 200, description = "Queue counters and branch breakdown", body = HoldQueueOverview)
    )
)]
pub async fn holds_overview(State(state): State<crate::AppState>) -> Json<HoldQueueOverview> {
    Json(state.services.holds.overview())
}
