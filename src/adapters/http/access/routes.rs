//! HTTP routes for access token endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_token, health, AccessHandlers};

/// Creates the access router.
pub fn access_routes(handlers: AccessHandlers) -> Router {
    Router::new()
        .route("/voice_agent/get_token", post(get_token))
        .route("/health", get(health))
        .with_state(handlers)
}
