//! Company Model
//!
//! A company is the tenant: the isolation boundary for every other
//! entity. No query may cross it outside the admin API.

use serde::{Deserialize, Serialize};

/// Company (tenant) entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub document: Option<String>,
    /// IANA timezone name used for business-day boundaries
    pub timezone: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub settings: serde_json::Value,
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Company registration payload — creates the tenant plus its first
/// admin user in one step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyRegister {
    pub company_name: String,
    pub document: Option<String>,
    pub timezone: Option<String>,
    pub user_name: String,
    pub email: String,
    pub password: String,
}
