//! Sales API Handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::sales::{self, PaymentQuery, SalesOrderQuery};
use crate::utils::{AppError, AppResult, time};
use shared::models::{
    Payment, PaymentCreate, SalesOrder, SalesOrderCreate, SalesOrderDetail, SalesOrderUpdate,
};

/// Query params for listing orders
#[derive(Debug, serde::Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
    pub client_id: Option<i64>,
    /// Calendar date (YYYY-MM-DD), matched against order creation
    pub date: Option<String>,
}

/// GET /api/sales/orders
pub async fn list(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<SalesOrder>>> {
    let query = SalesOrderQuery {
        status: query.status,
        client_id: query.client_id,
        day_range: time::day_range(query.date.as_deref(), state.tz)?,
    };
    let orders = sales::list(&state.pool, current_user.tenant_id, query).await?;
    Ok(Json(orders))
}

/// GET /api/sales/orders/:id — order with items
pub async fn get_by_id(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<SalesOrderDetail>> {
    let detail = sales::find_by_id(&state.pool, current_user.tenant_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Sales order {id} not found")))?;
    Ok(Json(detail))
}

/// POST /api/sales/orders
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<SalesOrderCreate>,
) -> AppResult<Json<SalesOrderDetail>> {
    let detail = sales::create(&state.pool, current_user.tenant_id, payload).await?;
    Ok(Json(detail))
}

/// PUT /api/sales/orders/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<SalesOrderUpdate>,
) -> AppResult<Json<SalesOrderDetail>> {
    let detail = sales::update(&state.pool, current_user.tenant_id, id, payload).await?;
    Ok(Json(detail))
}

/// POST /api/sales/orders/:id/payments
pub async fn add_payment(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<PaymentCreate>,
) -> AppResult<Json<Payment>> {
    let payment = sales::add_payment(&state.pool, current_user.tenant_id, id, payload).await?;
    Ok(Json(payment))
}

/// Query params for listing payments
#[derive(Debug, serde::Deserialize)]
pub struct PaymentListQuery {
    pub method: Option<String>,
    pub paid_from: Option<i64>,
    pub paid_until: Option<i64>,
}

/// GET /api/sales/payments
pub async fn list_payments(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<PaymentListQuery>,
) -> AppResult<Json<Vec<Payment>>> {
    let query = PaymentQuery {
        method: query.method,
        paid_from: query.paid_from,
        paid_until: query.paid_until,
    };
    let payments = sales::list_payments(&state.pool, current_user.tenant_id, query).await?;
    Ok(Json(payments))
}
