//! Administrative booking handlers
//!
//! Unlike the tenant-scoped API, the tenant here is explicit in the
//! payload (create) or resolved from the booking row itself (update,
//! delete), and delete removes the row outright.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::core::ServerState;
use crate::db::repository::booking::{self, BookingQuery};
use crate::utils::{AppError, AppResult, time};
use shared::models::{Booking, BookingCreate, BookingUpdate};

/// Create payload with an explicit target tenant
#[derive(Debug, serde::Deserialize)]
pub struct AdminBookingCreate {
    pub tenant_id: i64,
    #[serde(flatten)]
    pub booking: BookingCreate,
}

/// Query params for the cross-tenant listing
#[derive(Debug, serde::Deserialize)]
pub struct AdminListQuery {
    pub date: Option<String>,
    pub professional_id: Option<i64>,
    pub status: Option<String>,
}

/// GET /api/admin/bookings — all tenants
pub async fn list_all(
    State(state): State<ServerState>,
    Query(query): Query<AdminListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let query = BookingQuery {
        day_range: time::day_range(query.date.as_deref(), state.tz)?,
        professional_id: query.professional_id,
        status: query.status,
    };
    let bookings = booking::admin_list(&state.pool, query).await?;
    Ok(Json(bookings))
}

/// POST /api/admin/bookings — create on behalf of a tenant
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AdminBookingCreate>,
) -> AppResult<Json<Booking>> {
    let booking = booking::create(&state.pool, payload.tenant_id, payload.booking).await?;
    Ok(Json(booking))
}

/// PUT /api/admin/bookings/:id — tenant taken from the booking
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BookingUpdate>,
) -> AppResult<Json<Booking>> {
    let booking = booking::admin_update(&state.pool, id, payload).await?;
    Ok(Json(booking))
}

/// DELETE /api/admin/bookings/:id — hard delete, irreversible
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = booking::admin_delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::not_found(format!("Booking {id} not found")));
    }
    Ok(Json(true))
}
