//! Postgres credential authenticator
//!
//! Uses runtime `sqlx::query_as` (not macros) so the crate builds
//! without a live database. The row type is the only place the stored
//! password hash is materialized; it never leaves this module.

use async_trait::async_trait;
use nestfest_common::{verify_password_hash, Error, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{User, UserRole};
use crate::repository::authenticator::CredentialAuthenticator;

/// Row type for credential lookup (includes password_hash for verification)
#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: Uuid,
    email: String,
    name: String,
    role: UserRole,
    university: Option<String>,
    verified: bool,
    password_hash: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl CredentialRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            university: self.university,
            verified: self.verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Credential authenticator backed by the users table.
#[derive(Clone)]
pub struct PgCredentialAuthenticator {
    pool: PgPool,
}

impl PgCredentialAuthenticator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialAuthenticator for PgCredentialAuthenticator {
    async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>> {
        let row: Option<CredentialRow> = sqlx::query_as(
            r#"
            SELECT id, email, name, role, university, verified,
                   password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to query user by email");
            Error::Internal("credential lookup failed".to_string())
        })?;

        // Unknown email and wrong password take the same return path.
        let Some(row) = row else {
            return Ok(None);
        };

        if !verify_password_hash(password, &row.password_hash) {
            return Ok(None);
        }

        Ok(Some(row.into_user()))
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, email, name, role, university, verified,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            Error::Internal("user lookup failed".to_string())
        })?;

        Ok(user)
    }
}
