//! Router configuration for the site and the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Panel catalog
        .route("/panels", get(handlers::list_panels))
        // GPS tracking
        .route("/routes", get(handlers::get_routes))
        .route("/routes/stream", get(handlers::stream_route_points))
        // Financial transparency
        .route("/transparency", get(handlers::get_transparency))
        // Reservation intake
        .route("/reservations", post(handlers::submit_reservation))
        // Artwork preview uploads
        .route("/artwork", post(handlers::upload_artwork));

    // Combine the rendered site, health check and API
    Router::new()
        .route("/", get(handlers::index_page))
        .route("/reserve", get(handlers::reserve_page))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Twice the decoded artwork cap, leaving room for multipart framing.
        .layer(DefaultBodyLimit::max(4 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo =
            Arc::new(LocalRepository::new()) as Arc<dyn crate::db::repository::FullRepository>;
        let state = AppState::new(repo);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
