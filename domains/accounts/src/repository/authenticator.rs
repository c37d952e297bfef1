//! Credential authenticator boundary
//!
//! The login handler consumes this as a black box: verify a credential
//! pair, or look a user up by ID. Implementations must make unknown
//! email and wrong password indistinguishable to callers.

use async_trait::async_trait;
use nestfest_common::Result;
use uuid::Uuid;

use crate::domain::entities::User;

/// Verifies credentials and resolves user identities.
///
/// Handlers receive this as an explicitly passed `Arc<dyn ...>` handle,
/// never a process-global client, so tests can substitute an in-memory
/// implementation.
#[async_trait]
pub trait CredentialAuthenticator: Send + Sync {
    /// Verify an (email, password) pair.
    ///
    /// Returns `Ok(Some(user))` only on a full match. `Ok(None)` covers
    /// both unknown email and wrong password. `Err` is reserved for
    /// infrastructure failure.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>>;

    /// Look up a user by ID (for session introspection).
    async fn find_user(&self, id: Uuid) -> Result<Option<User>>;
}
