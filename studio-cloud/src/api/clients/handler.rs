//! Client API Handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::client;
use crate::utils::{AppError, AppResult};
use shared::models::{Client, ClientCreate, ClientUpdate};

#[derive(serde::Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// GET /api/clients
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Client>>> {
    let clients = client::find_all(&state.pool, current_user.tenant_id).await?;
    Ok(Json(clients))
}

/// GET /api/clients/search?q=xxx
pub async fn search(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Client>>> {
    let clients = client::search(&state.pool, current_user.tenant_id, &query.q).await?;
    Ok(Json(clients))
}

/// GET /api/clients/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Client>> {
    let client = client::find_by_id(&state.pool, current_user.tenant_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Client {id} not found")))?;
    Ok(Json(client))
}

/// POST /api/clients
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<ClientCreate>,
) -> AppResult<Json<Client>> {
    let client = client::create(&state.pool, current_user.tenant_id, payload).await?;
    Ok(Json(client))
}

/// PUT /api/clients/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<ClientUpdate>,
) -> AppResult<Json<Client>> {
    let client = client::update(&state.pool, current_user.tenant_id, id, payload).await?;
    Ok(Json(client))
}

/// DELETE /api/clients/:id — soft delete
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = client::delete(&state.pool, current_user.tenant_id, id).await?;
    Ok(Json(removed))
}
