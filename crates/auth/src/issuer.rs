//! Session issuance and validation
//!
//! Issuance mints an opaque per-login token, wraps it with the user ID
//! and timestamps into a claim, and signs the claim (HS256) with the
//! server-held secret. Validation reverses the transformation and
//! rejects anything unsigned, tampered with, or expired. No session
//! state is kept server-side, so a session cannot be revoked before
//! its expiry; logout only clears the client's cookie.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::SessionClaim;
use crate::config::SessionConfig;
use crate::cookie::{build_session_cookie, find_session_cookie};
use crate::error::AuthError;

/// Result of issuing a session: the decoded claim plus the `Set-Cookie`
/// header value to attach to the response.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub claim: SessionClaim,
    pub cookie: String,
}

/// Stateless session issuer/validator.
///
/// Cheap to clone; carries only configuration. Domain states expose
/// this via `FromRef` so the `SessionUser` extractor can reach it.
#[derive(Clone)]
pub struct SessionIssuer {
    config: SessionConfig,
}

impl SessionIssuer {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Mint a session for an already-authenticated user.
    ///
    /// Performs no credential checking; callers must have verified
    /// credentials first.
    pub fn issue(&self, user_id: Uuid) -> Result<IssuedSession, AuthError> {
        let iat = Utc::now().timestamp() as u64;
        let claim = SessionClaim {
            sid: new_session_token()?,
            sub: user_id.to_string(),
            iat,
            exp: iat + self.config.max_age_secs,
        };

        let key = EncodingKey::from_secret(self.config.secret.as_ref());
        let token = encode(&Header::new(Algorithm::HS256), &claim, &key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign session token");
            AuthError::SessionIssueFailed
        })?;

        let cookie = build_session_cookie(
            &token,
            self.config.max_age_secs,
            self.config.secure_cookies,
        );

        Ok(IssuedSession { claim, cookie })
    }

    /// Validate a signed session token and return its claim.
    pub fn validate(&self, token: &str) -> Result<SessionClaim, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        validation.leeway = 0;

        let key = DecodingKey::from_secret(self.config.secret.as_ref());
        let data = decode::<SessionClaim>(token, &key, &validation).map_err(|e| {
            tracing::debug!(error = %e, "Session validation failed");
            AuthError::InvalidSession
        })?;

        Ok(data.claims)
    }

    /// Validate the session carried by a raw `Cookie` header.
    pub fn validate_cookie_header(&self, header: &str) -> Result<SessionClaim, AuthError> {
        let token = find_session_cookie(header).ok_or(AuthError::MissingSession)?;
        if token.is_empty() {
            return Err(AuthError::MissingSession);
        }
        self.validate(token)
    }
}

/// Generate an opaque session token: 32 random bytes, hex-encoded.
fn new_session_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).map_err(|e| {
        tracing::error!(error = %e, "Failed to generate session token");
        AuthError::SessionIssueFailed
    })?;
    Ok(hex::encode(bytes))
}
