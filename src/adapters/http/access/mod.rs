//! HTTP adapter for access token endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, HealthResponse, TokenRequest, TokenResponse, UserIdValue};
pub use handlers::AccessHandlers;
pub use routes::access_routes;
