//! Session claim carried inside the signed cookie

use serde::{Deserialize, Serialize};

/// Wire form of a session claim, signed into the cookie value.
///
/// Standard JWT field names keep the token inspectable with common
/// tooling. `sid` is the opaque per-login token, `sub` the user ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaim {
    /// Opaque session token, unique per login
    pub sid: String,
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (unix seconds)
    pub iat: u64,
    /// Expires at (unix seconds)
    pub exp: u64,
}

impl SessionClaim {
    /// Parse the subject back into a user ID.
    pub fn user_id(&self) -> Result<uuid::Uuid, uuid::Error> {
        uuid::Uuid::parse_str(&self.sub)
    }
}
