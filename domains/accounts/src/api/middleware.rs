//! Accounts domain state and session issuer integration

use std::sync::Arc;
use std::time::Duration;

use axum::extract::FromRef;
use nestfest_auth::SessionIssuer;

use crate::repository::CredentialAuthenticator;

/// Application state for the accounts domain.
///
/// Handlers receive this explicitly via axum state; there is no
/// process-global client anywhere in the crate.
#[derive(Clone)]
pub struct AccountsState {
    pub authenticator: Arc<dyn CredentialAuthenticator>,
    pub sessions: SessionIssuer,
    /// Upper bound on the credential-check call
    pub auth_timeout: Duration,
}

impl FromRef<AccountsState> for SessionIssuer {
    fn from_ref(state: &AccountsState) -> Self {
        state.sessions.clone()
    }
}
