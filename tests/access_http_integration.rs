//! Integration tests for the token HTTP endpoints.
//!
//! Drives the full router (layers included) with `tower::ServiceExt::oneshot`
//! and decodes the issued JWT with the shared secret.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tower::ServiceExt;

use voice_navigator::adapters::auth::AccessClaims;
use voice_navigator::adapters::http::{api_router, AccessHandlers, ErrorResponse, TokenResponse};
use voice_navigator::adapters::JwtAccessTokenIssuer;
use voice_navigator::application::IssueAccessTokenHandler;
use voice_navigator::config::ServerConfig;
use voice_navigator::domain::access::TransportCredentials;

// =============================================================================
// Test Infrastructure
// =============================================================================

const API_KEY: &str = "devkey";
const API_SECRET: &str = "devsecret";

fn app_with(credentials: TransportCredentials) -> Router {
    let issuer = Arc::new(JwtAccessTokenIssuer::new(credentials));
    let handler = Arc::new(IssueAccessTokenHandler::new(
        issuer,
        "wss://rtc.example.com",
        std::time::Duration::from_secs(3600),
    ));
    api_router(AccessHandlers::new(handler), &ServerConfig::default())
}

fn app() -> Router {
    app_with(TransportCredentials::new(API_KEY, API_SECRET))
}

fn token_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/voice_agent/get_token")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(response).await;
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn get_token_issues_signed_room_token() {
    let response = app()
        .oneshot(token_request(r#"{"user_id": 7, "user_name": "Mitchell Admin"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: TokenResponse = body_json(response).await;
    assert_eq!(body.url, "wss://rtc.example.com");
    assert_eq!(body.participant, "Mitchell Admin");
    assert!(body.room.starts_with("voice_7_"));

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_nbf = true;
    validation.set_required_spec_claims(&["exp", "nbf"]);
    let claims = decode::<AccessClaims>(
        &body.token,
        &DecodingKey::from_secret(API_SECRET.as_bytes()),
        &validation,
    )
    .unwrap()
    .claims;

    assert_eq!(claims.iss, API_KEY);
    assert_eq!(claims.sub, "Mitchell Admin");
    assert_eq!(claims.video.room, body.room);
    assert!(claims.video.room_join);
    assert!(claims.video.can_publish);
    assert!(claims.video.can_subscribe);
    assert_eq!(claims.exp - claims.nbf, 3600);
}

#[tokio::test]
async fn get_token_falls_back_to_user_id_name() {
    let response = app()
        .oneshot(token_request(r#"{"user_id": "42"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: TokenResponse = body_json(response).await;
    assert_eq!(body.participant, "User42");
}

#[tokio::test]
async fn blank_user_id_is_bad_request() {
    let response = app()
        .oneshot(token_request(r#"{"user_id": "  "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = body_json(response).await;
    assert_eq!(body.code, "VALIDATION_FAILED");
}

#[tokio::test]
async fn missing_credentials_is_internal_error() {
    let response = app_with(TransportCredentials::new("", ""))
        .oneshot(token_request(r#"{"user_id": 7}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = body_json(response).await;
    assert_eq!(body.code, "TOKEN_ERROR");
}

#[tokio::test]
async fn body_without_user_id_is_json_bad_request() {
    let response = app()
        .oneshot(token_request(r#"{"user_name": "no id"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = body_json(response).await;
    assert_eq!(body.code, "VALIDATION_FAILED");
    assert!(body.message.contains("user_id"));
}

#[tokio::test]
async fn unparseable_body_is_json_bad_request() {
    let response = app().oneshot(token_request("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = body_json(response).await;
    assert_eq!(body.code, "VALIDATION_FAILED");
}

#[tokio::test]
async fn missing_content_type_is_json_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/voice_agent/get_token")
        .body(Body::from(r#"{"user_id": 7}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = body_json(response).await;
    assert_eq!(body.code, "VALIDATION_FAILED");
}
