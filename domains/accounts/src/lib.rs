//! Accounts domain: users, credential authentication, login API

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{User, UserRole};
// Re-export repository types
pub use repository::{
    CredentialAuthenticator, InMemoryCredentialAuthenticator, PgCredentialAuthenticator,
};

// Re-export API types
pub use api::routes;
pub use api::AccountsState;
