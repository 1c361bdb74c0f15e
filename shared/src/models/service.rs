//! Service Model (catalog)

use serde::{Deserialize, Serialize};

/// Service entity, tenant-scoped catalog item. `duration_minutes` feeds
/// the booking end-time fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Service {
    pub id: i64,
    pub tenant_id: i64,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: i64,
    pub price: f64,
    pub color: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<i64>,
}

/// Create service payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCreate {
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: i64,
    pub price: f64,
    pub color: Option<String>,
}

/// Update service payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i64>,
    pub price: Option<f64>,
    pub color: Option<String>,
}
