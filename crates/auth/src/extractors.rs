//! Axum extractors for session authentication
//!
//! Generic over any state `S` where `SessionIssuer: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::COOKIE, request::Parts},
};

use crate::claims::SessionClaim;
use crate::error::AuthError;
use crate::issuer::SessionIssuer;

/// Authenticated session extractor.
///
/// Decodes and verifies the session cookie, yielding the caller's
/// identity claim. Validation is pure (config + clock); handlers
/// needing full user data load it from their domain's repository.
#[derive(Debug)]
pub struct SessionUser(pub SessionClaim);

impl<S> FromRequestParts<S> for SessionUser
where
    SessionIssuer: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let issuer = SessionIssuer::from_ref(state);

        let cookie_header = parts
            .headers
            .get(COOKIE)
            .ok_or(AuthError::MissingSession)?
            .to_str()
            .map_err(|_| AuthError::InvalidSession)?;

        let claim = issuer.validate_cookie_header(cookie_header)?;

        Ok(SessionUser(claim))
    }
}
