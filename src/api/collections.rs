//! Collection analysis endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::collection::{CollectionCategory, CollectionSummary, FeaturedCollection};

/// Collection analysis: summary figures plus per-category rows
#[derive(Serialize, ToSchema)]
pub struct CollectionAnalysisResponse {
    /// Collection-wide summary figures
    pub summary: CollectionSummary,
    /// Per-category analysis rows
    pub categories: Vec<CollectionCategory>,
}

/// Browse page highlights
#[derive(Serialize, ToSchema)]
pub struct BrowseHighlights {
    /// Most popular search terms
    pub popular_searches: Vec<String>,
    /// Featured collections with item counts
    pub collections: Vec<FeaturedCollection>,
}

/// Get collection analysis
#[utoipa::path(
    get,
    path = "/collections/analysis",
    tag = "collections",
    responses(
        (status = 200, description = "Collection analysis", body = CollectionAnalysisResponse)
    )
)]
pub async fn collection_analysis(
    State(state): State<crate::AppState>,
) -> Json<CollectionAnalysisResponse> {
    Json(state.services.collections.analysis())
}

/// Get browse highlights
#[utoipa::path(
    get,
    path = "/collections/highlights",
    tag = "collections",
    responses(
        (status = 200, description = "Popular searches and featured collections", body = BrowseHighlights)
    )
)]
pub async fn browse_highlights(State(state): State<crate::AppState>) -> Json<BrowseHighlights> {
    Json(state.services.collections.highlights())
}
