//! In-memory credential authenticator
//!
//! Provides credential verification without external dependencies for
//! integration tests and local development. Stores the same
//! `salt:hash` form the Postgres implementation reads, so the full
//! hash-verification path is exercised.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use nestfest_common::{hash_password, verify_password_hash, Result};
use uuid::Uuid;

use crate::domain::entities::{User, UserRole};
use crate::repository::authenticator::CredentialAuthenticator;

#[derive(Clone)]
struct StoredAccount {
    user: User,
    password_hash: String,
}

/// In-memory credential store keyed by email.
#[derive(Clone, Default)]
pub struct InMemoryCredentialAuthenticator {
    accounts: Arc<Mutex<HashMap<String, StoredAccount>>>,
}

impl InMemoryCredentialAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account with the given credentials. Returns the stored user.
    pub fn add_account(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: UserRole,
        university: Option<&str>,
        verified: bool,
    ) -> User {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            university: university.map(str::to_string),
            verified,
            created_at: now,
            updated_at: now,
        };

        let stored = StoredAccount {
            user: user.clone(),
            password_hash: hash_password(password).expect("password hashing failed"),
        };

        self.accounts
            .lock()
            .expect("account store lock poisoned")
            .insert(email.to_string(), stored);

        user
    }
}

#[async_trait]
impl CredentialAuthenticator for InMemoryCredentialAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>> {
        let accounts = self.accounts.lock().expect("account store lock poisoned");

        let Some(stored) = accounts.get(email) else {
            return Ok(None);
        };

        if !verify_password_hash(password, &stored.password_hash) {
            return Ok(None);
        }

        Ok(Some(stored.user.clone()))
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>> {
        let accounts = self.accounts.lock().expect("account store lock poisoned");
        Ok(accounts.values().find(|a| a.user.id == id).map(|a| a.user.clone()))
    }
}
