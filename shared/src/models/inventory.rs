//! Inventory Model (stock movements)

use serde::{Deserialize, Serialize};

/// Inventory movement types
pub mod movement_type {
    pub const IN: &str = "in";
    pub const OUT: &str = "out";
    pub const ADJUSTMENT: &str = "adjustment";

    pub fn is_valid(kind: &str) -> bool {
        matches!(kind, IN | OUT | ADJUSTMENT)
    }
}

/// Inventory movement entity, tenant-scoped
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct InventoryMovement {
    pub id: i64,
    pub tenant_id: i64,
    pub product_id: i64,
    pub order_id: Option<i64>,
    pub movement_type: String,
    pub quantity: i64,
    pub reason: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create inventory movement payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryMovementCreate {
    pub product_id: i64,
    pub order_id: Option<i64>,
    pub movement_type: String,
    pub quantity: i64,
    pub reason: Option<String>,
}
