//! Token service for the voice navigator.
//!
//! Serves `POST /voice_agent/get_token` so the host application can hand its
//! browser client a room token, and `GET /health`.

use std::sync::Arc;

use voice_navigator::adapters::http::{api_router, AccessHandlers};
use voice_navigator::adapters::JwtAccessTokenIssuer;
use voice_navigator::application::IssueAccessTokenHandler;
use voice_navigator::config::AppConfig;
use voice_navigator::domain::navigation::Intent;
use voice_navigator::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    telemetry::init_tracing(&config.server.log_level, config.is_production());

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    let session = config.session_config()?;
    let instructions = config.agent.instructions();
    tracing::info!(
        host = %session.host_base_url,
        intents = Intent::ALL.len(),
        greeting_chars = config.agent.greeting.chars().count(),
        instructions_chars = instructions.as_str().chars().count(),
        "Agent session settings loaded"
    );

    let issuer = Arc::new(JwtAccessTokenIssuer::new(config.transport.credentials()));
    let issue_handler = Arc::new(IssueAccessTokenHandler::new(
        issuer,
        config.transport.url.clone(),
        config.transport.token_ttl(),
    ));
    let app = api_router(AccessHandlers::new(issue_handler), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        transport = %config.transport.url,
        "Voice navigator token service listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
