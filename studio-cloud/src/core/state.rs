//! Server state — shared handles for all request handlers

use std::sync::Arc;

use chrono_tz::Tz;
use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared application state. Cloning is cheap (Arc + pool handles).
#[derive(Clone)]
pub struct ServerState {
    /// Immutable configuration
    pub config: Arc<Config>,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT token service
    pub jwt: Arc<JwtService>,
    /// Business timezone, parsed once at startup
    pub tz: Tz,
}

impl ServerState {
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;

        let tz: Tz = config.timezone.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid BUSINESS_TIMEZONE '{}', falling back to UTC",
                config.timezone
            );
            chrono_tz::UTC
        });

        Ok(Self {
            config: Arc::new(config.clone()),
            pool: db.pool,
            jwt: Arc::new(JwtService::new(
                config.jwt_secret.clone(),
                config.jwt_expiry_hours,
            )),
            tz,
        })
    }
}
