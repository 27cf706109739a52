//! HTTP adapters - REST API implementations.
//!
//! Exposes the token endpoint the host application calls before its browser
//! client joins a room, plus a liveness check.

pub mod access;

pub use access::{access_routes, AccessHandlers, ErrorResponse, HealthResponse, TokenResponse};

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Full API router with tracing, CORS, and request timeout layers.
pub fn api_router(handlers: AccessHandlers, server: &ServerConfig) -> Router {
    access_routes(handlers)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let allow_origin = match server.allowed_origins() {
        Ok(origins) if origins.is_empty() => AllowOrigin::from(Any),
        Ok(origins) => AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Invalid CORS origins, refusing cross-origin requests");
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
