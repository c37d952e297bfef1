//! Credential authenticator implementations for the accounts domain

pub mod authenticator;
pub mod memory;
pub mod pg;

pub use authenticator::CredentialAuthenticator;
pub use memory::InMemoryCredentialAuthenticator;
pub use pg::PgCredentialAuthenticator;
