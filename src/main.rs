//! LYBSYS Server - Library Management Dashboard
//!
//! A Rust REST API server for the LYBSYS library dashboard.

use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lybsys_server::{api, config::AppConfig, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("lybsys_server={},tower_http=debug", config.logging.level).into()
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting LYBSYS Server v{}", env!("CARGO_PKG_VERSION"));

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services
    let services = Services::new(&config).expect("Failed to create services");

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Reservations
        .route("/reservations", get(api::reservations::get_booking_form))
        .route("/reservations", post(api::reservations::submit_booking))
        .route("/reservations/draft", put(api::reservations::update_draft))
        .route("/reservations/reset", post(api::reservations::reset_booking))
        .route("/reservations/preview", post(api::reservations::preview_stay))
        .route("/reservations/calendar", get(api::reservations::calendar_rules))
        // Rooms
        .route("/rooms", get(api::rooms::list_room_types))
        .route("/rooms/:id", get(api::rooms::get_room_type))
        // Holds
        .route("/holds", get(api::holds::list_holds))
        .route("/holds/overview", get(api::holds::holds_overview))
        // Collections
        .route("/collections/analysis", get(api::collections::collection_analysis))
        .route("/collections/highlights", get(api::collections::browse_highlights))
        // Inventory
        .route("/inventory/overview", get(api::inventory::inventory_overview))
        .route("/inventory/activity", get(api::inventory::inventory_activity))
        // Missing items
        .route("/missing-items", get(api::missing_items::list_missing_items))
        .route(
            "/missing-items/overview",
            get(api::missing_items::missing_items_overview),
        )
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
