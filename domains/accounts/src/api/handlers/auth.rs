//! Authentication API handlers
//!
//! Implements:
//! - POST /v1/auth/login  — Verify credentials and issue a session cookie
//! - POST /v1/auth/logout — Clear the session cookie
//! - GET  /v1/auth/me     — Return the current user's public identity

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};
use nestfest_auth::{clear_session_cookie, SessionUser};
use nestfest_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{User, UserRole};
use crate::AccountsState;

/// Generic message for any credential rejection. Identical for unknown
/// email and wrong password so accounts cannot be enumerated.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

const INVALID_SESSION: &str = "Invalid or expired session";

/// Request for login. Declared schema, validated at the boundary
/// before any credential check runs.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public user fields for auth responses
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub university: Option<String>,
    pub verified: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            university: user.university,
            verified: user.verified,
        }
    }
}

/// Response for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserResponse,
}

/// Response for GET /v1/auth/me
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
}

/// Response for logout
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// POST /v1/auth/login — Verify credentials and issue a session cookie.
///
/// The credential check is bounded by `state.auth_timeout`; a timeout
/// or authenticator failure maps to the same 401 as bad credentials
/// and never to a granted session.
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse> {
    let check = state.authenticator.authenticate(&req.email, &req.password);

    let user = match tokio::time::timeout(state.auth_timeout, check).await {
        Ok(Ok(Some(user))) => user,
        Ok(Ok(None)) => {
            return Err(Error::Authentication(INVALID_CREDENTIALS.to_string()));
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Credential authenticator failed");
            return Err(Error::Authentication(INVALID_CREDENTIALS.to_string()));
        }
        Err(_) => {
            tracing::warn!(
                timeout_ms = state.auth_timeout.as_millis() as u64,
                "Credential check timed out"
            );
            return Err(Error::Authentication(INVALID_CREDENTIALS.to_string()));
        }
    };

    let issued = state
        .sessions
        .issue(user.id)
        .map_err(|_| Error::Internal("failed to issue session".to_string()))?;

    tracing::info!(user_id = %user.id, role = %user.role, "User logged in");

    let body = LoginResponse {
        success: true,
        user: UserResponse::from(user),
    };

    Ok(([(SET_COOKIE, issued.cookie)], Json(body)))
}

/// POST /v1/auth/logout — Clear the session cookie.
///
/// Sessions are stateless, so this only instructs the client to drop
/// the cookie; an already-captured token stays valid until expiry.
pub async fn logout(State(state): State<AccountsState>) -> impl IntoResponse {
    let cookie = clear_session_cookie(state.sessions.config().secure_cookies);

    (
        [(SET_COOKIE, cookie)],
        Json(LogoutResponse { success: true }),
    )
}

/// GET /v1/auth/me — Return the current user's public identity.
pub async fn me(
    SessionUser(claim): SessionUser,
    State(state): State<AccountsState>,
) -> Result<Json<MeResponse>> {
    let user_id = claim
        .user_id()
        .map_err(|_| Error::Authentication(INVALID_SESSION.to_string()))?;

    let user = state
        .authenticator
        .find_user(user_id)
        .await?
        .ok_or_else(|| Error::Authentication(INVALID_SESSION.to_string()))?;

    Ok(Json(MeResponse {
        user: UserResponse::from(user),
    }))
}
