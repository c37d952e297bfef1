//! Session issuance and validation for the NestFest API
//!
//! Converts a successful authentication result into a signed, expiring
//! session cookie, and reverses that transformation on subsequent
//! requests via an axum extractor that works with any state
//! implementing `FromRef<S>` for `SessionIssuer`.

mod claims;
mod config;
mod cookie;
mod error;
mod extractors;
mod issuer;

pub use claims::SessionClaim;
pub use config::SessionConfig;
pub use cookie::{clear_session_cookie, SESSION_COOKIE};
pub use error::AuthError;
pub use extractors::SessionUser;
pub use issuer::{IssuedSession, SessionIssuer};
