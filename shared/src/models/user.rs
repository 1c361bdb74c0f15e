//! User Model (staff accounts)

use serde::{Deserialize, Serialize};

/// User roles
pub mod user_role {
    pub const ADMIN: &str = "admin";
    pub const MANAGER: &str = "manager";
    pub const STAFF: &str = "staff";

    pub fn is_valid(role: &str) -> bool {
        matches!(role, ADMIN | MANAGER | STAFF)
    }
}

/// Staff user entity, tenant-scoped. The password hash never leaves the
/// server.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub tenant_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub last_login_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
