//! Server configuration
//!
//! All settings come from environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | DATABASE_PATH | studio-cloud.db | SQLite database file |
//! | HTTP_PORT | 8080 | HTTP API port |
//! | JWT_SECRET | (required outside development) | Token signing secret |
//! | JWT_EXPIRY_HOURS | 24 | Token lifetime |
//! | BUSINESS_TIMEZONE | UTC | Timezone for day-boundary filters |
//! | ENVIRONMENT | development | development \| staging \| production |

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file path
    pub database_path: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT lifetime in hours
    pub jwt_expiry_hours: i64,
    /// IANA timezone used for date filters (per-deployment default)
    pub timezone: String,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Require a secret env var: must be set and non-empty outside
    /// development.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "studio-cloud.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            jwt_expiry_hours: std::env::var("JWT_EXPIRY_HOURS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(24),
            timezone: std::env::var("BUSINESS_TIMEZONE").unwrap_or_else(|_| "UTC".into()),
            environment,
        })
    }
}
