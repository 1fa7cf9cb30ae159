//! Axum router configuration with middleware.
//!
//! Routes live at the root (no version prefix), matching the surface the
//! front-end already speaks. Middleware: CORS, tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_check))
        // Chat
        .route("/chat", post(handlers::chat::chat))
        // Trip CRUD
        .route("/trips", post(handlers::trip::add_trip))
        .route(
            "/trips/{trip_uuid}",
            get(handlers::trip::get_trip)
                .put(handlers::trip::edit_trip)
                .delete(handlers::trip::cancel_trip),
        )
        .route(
            "/users/{user_uuid}/trips",
            get(handlers::trip::list_trips_by_user),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Plaintext health check.
async fn health_check() -> &'static str {
    "Wayfarer trip planner is running"
}
