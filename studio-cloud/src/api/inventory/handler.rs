//! Inventory API Handlers

use axum::{
    Json,
    extract::{Extension, Query, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::inventory::{self, InventoryQuery};
use crate::utils::AppResult;
use shared::models::{InventoryMovement, InventoryMovementCreate};

/// Query params for listing movements
#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    pub product_id: Option<i64>,
    pub movement_type: Option<String>,
    pub created_from: Option<i64>,
    pub created_until: Option<i64>,
}

/// GET /api/inventory/movements
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<InventoryMovement>>> {
    let query = InventoryQuery {
        product_id: query.product_id,
        movement_type: query.movement_type,
        created_from: query.created_from,
        created_until: query.created_until,
    };
    let movements = inventory::list(&state.pool, current_user.tenant_id, query).await?;
    Ok(Json(movements))
}

/// POST /api/inventory/movements
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<InventoryMovementCreate>,
) -> AppResult<Json<InventoryMovement>> {
    let movement = inventory::create(&state.pool, current_user.tenant_id, payload).await?;
    Ok(Json(movement))
}
