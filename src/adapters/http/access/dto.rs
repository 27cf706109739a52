//! HTTP DTOs for access token endpoints.

use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::application::IssueAccessTokenCommand;
use crate::domain::access::{IssuedAccessToken, TokenError};
use crate::domain::foundation::ErrorCode;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// User id as sent by the host application: numeric database ids and opaque
/// string ids are both accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum UserIdValue {
    Number(i64),
    Text(String),
}

impl UserIdValue {
    pub fn into_string(self) -> String {
        match self {
            UserIdValue::Number(n) => n.to_string(),
            UserIdValue::Text(s) => s,
        }
    }
}

/// Request body for POST /voice_agent/get_token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub user_id: UserIdValue,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl From<TokenRequest> for IssueAccessTokenCommand {
    fn from(req: TokenRequest) -> Self {
        Self {
            user_id: req.user_id.into_string(),
            user_name: req.user_name,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// Connection details for the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub url: String,
    pub room: String,
    pub participant: String,
}

impl From<IssuedAccessToken> for TokenResponse {
    fn from(issued: IssuedAccessToken) -> Self {
        Self {
            token: issued.token,
            url: issued.url,
            room: issued.room,
            participant: issued.participant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&TokenError> for ErrorResponse {
    fn from(err: &TokenError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<&JsonRejection> for ErrorResponse {
    fn from(rejection: &JsonRejection) -> Self {
        Self {
            code: ErrorCode::ValidationFailed.to_string(),
            message: rejection.body_text(),
        }
    }
}
