//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{collections, health, holds, inventory, missing_items, reservations, rooms};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LYBSYS API",
        version = "0.1.0",
        description = "Library Management Dashboard REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "LYBSYS Team", email = "contact@lybsys.org")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Reservations
        reservations::get_booking_form,
        reservations::update_draft,
        reservations::submit_booking,
        reservations::reset_booking,
        reservations::preview_stay,
        reservations::calendar_rules,
        // Rooms
        rooms::list_room_types,
        rooms::get_room_type,
        // Holds
        holds::list_holds,
        holds::holds_overview,
        // Collections
        collections::collection_analysis,
        collections::browse_highlights,
        // Inventory
        inventory::inventory_overview,
        inventory::inventory_activity,
        // Missing items
        missing_items::list_missing_items,
        missing_items::missing_items_overview,
    ),
    components(
        schemas(
            // Reservations
            reservations::BookingFormView,
            reservations::StayQuoteRequest,
            reservations::CalendarField,
            reservations::CalendarQuery,
            reservations::CalendarRuleResponse,
            crate::models::booking::BookingDraft,
            crate::models::booking::BookingSummary,
            crate::models::booking::StayQuote,
            crate::models::booking::BookingField,
            crate::models::booking::BookingErrorKind,
            crate::models::booking::FieldError,
            crate::models::booking::FieldErrors,
            // Rooms
            crate::models::room::RoomType,
            crate::models::room::RoomTypeId,
            // Holds
            holds::HoldQueueQuery,
            holds::HoldQueueOverview,
            crate::models::hold::HoldRequest,
            crate::models::hold::HoldStatus,
            crate::models::hold::Branch,
            crate::models::hold::HoldQueueStats,
            crate::models::hold::BranchHolds,
            // Collections
            collections::CollectionAnalysisResponse,
            collections::BrowseHighlights,
            crate::models::collection::CollectionCategory,
            crate::models::collection::CollectionSummary,
            crate::models::collection::ConditionBreakdown,
            crate::models::collection::FeaturedCollection,
            // Inventory
            inventory::InventoryOverview,
            crate::models::inventory::InventoryStats,
            crate::models::inventory::InventoryActivity,
            // Missing items
            missing_items::MissingItemsQuery,
            missing_items::MissingItemsOverview,
            crate::models::missing_item::MissingItem,
            crate::models::missing_item::MissingStatus,
            crate::models::missing_item::Severity,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "reservations", description = "Reservation form"),
        (name = "rooms", description = "Room catalog"),
        (name = "holds", description = "Hold queue management"),
        (name = "collections", description = "Collection analysis"),
        (name = "inventory", description = "Inventory management"),
        (name = "missing-items", description = "Missing item tracking")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
