//! Session configuration

/// Configuration for session issuance and validation
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Server-held signing secret, never exposed to clients
    pub secret: String,
    /// Session lifetime in seconds
    pub max_age_secs: u64,
    /// Mark cookies `Secure` (production only)
    pub secure_cookies: bool,
}
