//! Booking API Handlers
//!
//! The tenant id always comes from the authenticated session
//! ([`CurrentUser`]), never from the request payload.

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::booking::{self, BookingQuery};
use crate::utils::{AppError, AppResult, time};
use shared::models::{Booking, BookingCancel, BookingCreate, BookingUpdate};

/// Query params for listing bookings
#[derive(Debug, serde::Deserialize)]
pub struct ListQuery {
    /// Calendar date (YYYY-MM-DD), matched against the booking start in
    /// the business timezone
    pub date: Option<String>,
    pub professional_id: Option<i64>,
    pub status: Option<String>,
}

impl ListQuery {
    fn into_booking_query(self, state: &ServerState) -> AppResult<BookingQuery> {
        Ok(BookingQuery {
            day_range: time::day_range(self.date.as_deref(), state.tz)?,
            professional_id: self.professional_id,
            status: self.status,
        })
    }
}

/// GET /api/bookings
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let query = query.into_booking_query(&state)?;
    let bookings = booking::list(&state.pool, current_user.tenant_id, query).await?;
    Ok(Json(bookings))
}

/// GET /api/bookings/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Booking>> {
    let booking = booking::find_by_id(&state.pool, current_user.tenant_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
    Ok(Json(booking))
}

/// POST /api/bookings
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<Booking>> {
    let booking = booking::create(&state.pool, current_user.tenant_id, payload).await?;
    Ok(Json(booking))
}

/// PUT /api/bookings/:id — sparse update with conflict re-check when the
/// interval moves
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<BookingUpdate>,
) -> AppResult<Json<Booking>> {
    let booking = booking::update(&state.pool, current_user.tenant_id, id, payload).await?;
    Ok(Json(booking))
}

/// POST /api/bookings/:id/cancel
pub async fn cancel(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<BookingCancel>,
) -> AppResult<Json<Booking>> {
    let booking =
        booking::cancel(&state.pool, current_user.tenant_id, id, payload.reason).await?;
    Ok(Json(booking))
}

/// DELETE /api/bookings/:id — soft delete
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let removed = booking::delete(&state.pool, current_user.tenant_id, id).await?;
    if !removed {
        return Err(AppError::not_found(format!("Booking {id} not found")));
    }
    Ok(Json(true))
}
