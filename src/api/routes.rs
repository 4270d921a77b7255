//! API Routes
//!
//! Configures the Axum router with all key-value server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{delete_handler, get_handler, health_handler, set_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /health` - Health check endpoint
/// - `GET /set/:key/:value` - Store a pair unless the key exists
/// - `GET /get/:key` - Retrieve a value by key
/// - `GET /delete/:key` - Delete a key
///
/// The short forms (`/set/`, `/set/:key`, `/get/`, `/delete/` and friends)
/// reach the same handlers, which reject them with a 400 for the missing
/// parameter.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/set/:key/:value", get(set_handler))
        .route("/set/:key/", get(set_handler))
        .route("/set/:key", get(set_handler))
        .route("/set/", get(set_handler))
        .route("/get/:key", get(get_handler))
        .route("/get/", get(get_handler))
        .route("/delete/:key", get(delete_handler))
        .route("/delete/", get(delete_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
