//! Shared utilities, configuration, and error handling for NestFest
//!
//! This crate provides common functionality used across the NestFest
//! auth service:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Password hashing utilities
//! - Request validation extractors

pub mod config;
pub mod crypto;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use crypto::{hash_password, verify_password_hash};
pub use error::{Error, Result};
pub use extractors::ValidatedJson;
