//! Repository Module
//!
//! Data access over the SQLite pool. Every tenant-scoped function takes
//! the caller's tenant id and includes `tenant_id = ?` in its predicate;
//! a lookup that would succeed only because an id matches a row in
//! another tenant must fail as NotFound.

pub mod booking;
pub mod client;
pub mod company;
pub mod inventory;
pub mod product;
pub mod professional;
pub mod sales;
pub mod service;
pub mod tenant_guard;
pub mod user;

pub use tenant_guard::{TenantEntity, ensure_tenant_record};

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
