//! Route definitions for the accounts domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::auth;
use super::middleware::AccountsState;

/// Create authentication routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .route("/v1/auth/login", post(auth::login))
        .route("/v1/auth/logout", post(auth::logout))
        .route("/v1/auth/me", get(auth::me))
}
