//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity, tenant-scoped. SKU is unique per tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub tenant_id: i64,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub cost: f64,
    pub stock_qty: i64,
    pub min_stock: i64,
    pub description: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<i64>,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub cost: Option<f64>,
    pub stock_qty: Option<i64>,
    pub min_stock: Option<i64>,
    pub description: Option<String>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub cost: Option<f64>,
    pub stock_qty: Option<i64>,
    pub min_stock: Option<i64>,
    pub description: Option<String>,
}
