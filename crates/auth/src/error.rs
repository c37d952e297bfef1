//! Authentication errors
//!
//! Wire messages stay deliberately generic: a rejected login must not
//! reveal whether the account exists, and a rejected cookie must not
//! reveal whether it was malformed, tampered with, or merely expired.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// No session cookie on the request
    MissingSession,
    /// Cookie present but malformed, tampered with, or expired
    InvalidSession,
    /// Credentials rejected, or the credential check failed/timed out
    InvalidCredentials,
    /// Session could not be minted (signing failure)
    SessionIssueFailed,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingSession
            | AuthError::InvalidSession
            | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::SessionIssueFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AuthError::MissingSession => "Authentication required",
            AuthError::InvalidSession => "Invalid or expired session",
            AuthError::InvalidCredentials => "Invalid email or password",
            AuthError::SessionIssueFailed => "Internal server error",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message() }));
        (self.status_code(), body).into_response()
    }
}
