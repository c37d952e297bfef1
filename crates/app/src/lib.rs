//! NestFest auth service composition root
//!
//! Composes the accounts domain router with shared infrastructure
//! routes and wires explicit state for every handler.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use nestfest_accounts::{AccountsState, PgCredentialAuthenticator};
use nestfest_auth::{SessionConfig, SessionIssuer};
use nestfest_common::Config;
use sqlx::PgPool;

/// Build the application router for a prepared accounts state.
///
/// Split out from [`create_app`] so tests can inject an in-memory
/// credential authenticator.
pub fn build_router(state: AccountsState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "NestFest Auth API v0.1.0" }),
        )
        .merge(nestfest_accounts::routes().with_state(state))
}

/// Create the main application router backed by Postgres.
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let sessions = SessionIssuer::new(SessionConfig {
        secret: config.session_secret.clone(),
        max_age_secs: config.session_max_age_secs,
        secure_cookies: config.production,
    });

    let state = AccountsState {
        authenticator: Arc::new(PgCredentialAuthenticator::new(pool)),
        sessions,
        auth_timeout: Duration::from_millis(config.auth_timeout_ms),
    };

    Ok(build_router(state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
