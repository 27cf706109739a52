//! HTTP handlers for access token endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::IssueAccessTokenHandler;
use crate::domain::access::TokenError;

use super::dto::{ErrorResponse, HealthResponse, TokenRequest, TokenResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AccessHandlers {
    issue_handler: Arc<IssueAccessTokenHandler>,
}

impl AccessHandlers {
    pub fn new(issue_handler: Arc<IssueAccessTokenHandler>) -> Self {
        Self { issue_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /voice_agent/get_token - Issue a room token for the calling user
pub async fn get_token(
    State(handlers): State<AccessHandlers>,
    payload: Result<Json<TokenRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected token request body");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(&rejection))).into_response();
        }
    };

    match handlers.issue_handler.handle(req.into()) {
        Ok(issued) => (StatusCode::OK, Json(TokenResponse::from(issued))).into_response(),
        Err(e) => handle_token_error(e),
    }
}

/// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

fn handle_token_error(err: TokenError) -> Response {
    let status = match &err {
        TokenError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        TokenError::MissingCredentials | TokenError::Signing(_) => {
            tracing::error!(error = %err, "Error generating access token");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ErrorResponse::from(&err))).into_response()
}
