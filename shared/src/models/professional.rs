//! Professional Model
//!
//! The professional's timeline is the contended resource for booking
//! conflict detection.

use serde::{Deserialize, Serialize};

/// Professional entity, tenant-scoped
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Professional {
    pub id: i64,
    pub tenant_id: i64,
    /// Linked staff account, if any
    pub user_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub specialties: serde_json::Value,
    /// Informational only — conflict detection treats the timeline as
    /// single-occupancy
    pub max_parallel: i64,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<i64>,
}

/// Create professional payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalCreate {
    pub user_id: Option<i64>,
    pub name: String,
    pub specialties: Option<serde_json::Value>,
    pub max_parallel: Option<i64>,
}

/// Update professional payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfessionalUpdate {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub specialties: Option<serde_json::Value>,
    pub max_parallel: Option<i64>,
    pub is_active: Option<bool>,
}
