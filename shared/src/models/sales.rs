//! Sales Models (orders, items, payments)

use serde::{Deserialize, Serialize};

/// Sales order status values
pub mod order_status {
    pub const DRAFT: &str = "draft";
    pub const CONFIRMED: &str = "confirmed";
    pub const PAID: &str = "paid";
    pub const CANCELED: &str = "canceled";

    pub fn is_valid(status: &str) -> bool {
        matches!(status, DRAFT | CONFIRMED | PAID | CANCELED)
    }
}

/// Sales item reference types
pub mod item_type {
    pub const SERVICE: &str = "service";
    pub const PRODUCT: &str = "product";
}

/// Sales order entity, tenant-scoped. Optionally linked to one booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SalesOrder {
    pub id: i64,
    pub tenant_id: i64,
    pub client_id: i64,
    pub booking_id: Option<i64>,
    pub status: String,
    pub payment_method: Option<String>,
    pub total: f64,
    pub discount: f64,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<i64>,
}

/// Sales line item — references a service or a product of the same tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SalesItem {
    pub id: i64,
    pub tenant_id: i64,
    pub order_id: i64,
    pub item_type: String,
    pub item_ref_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Sales order with its items (for detail views)
#[derive(Debug, Clone, Serialize)]
pub struct SalesOrderDetail {
    #[serde(flatten)]
    pub order: SalesOrder,
    pub items: Vec<SalesItem>,
}

/// Create sales item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesItemCreate {
    pub item_type: String,
    pub item_ref_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
}

/// Create sales order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesOrderCreate {
    pub client_id: i64,
    pub booking_id: Option<i64>,
    pub items: Vec<SalesItemCreate>,
    #[serde(default)]
    pub discount: f64,
    pub notes: Option<String>,
}

/// Update sales order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesOrderUpdate {
    pub status: Option<String>,
    pub notes: Option<String>,
}

/// Payment entity, tenant-scoped, attached to an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payment {
    pub id: i64,
    pub tenant_id: i64,
    pub order_id: i64,
    pub method: String,
    pub amount: f64,
    pub paid_at: i64,
    #[serde(default)]
    pub details: serde_json::Value,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Record payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentCreate {
    pub method: String,
    pub amount: f64,
    pub paid_at: Option<i64>,
    pub details: Option<serde_json::Value>,
}
