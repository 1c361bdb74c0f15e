//! Sales Repository (orders, items, payments)
//!
//! Structurally a thin consumer of the tenant guard: every reference an
//! order carries (client, booking, items, the order itself for payments)
//! must belong to the caller's tenant.

use super::tenant_guard::{TenantEntity, ensure_tenant_record, ensure_tenant_record_in};
use super::{RepoError, RepoResult};
use shared::models::{
    Payment, PaymentCreate, SalesItem, SalesOrder, SalesOrderCreate, SalesOrderDetail,
    SalesOrderUpdate, item_type, order_status,
};
use sqlx::{SqliteConnection, SqlitePool};

const ORDER_SELECT: &str = "SELECT id, tenant_id, client_id, booking_id, status, payment_method, total, discount, notes, created_at, updated_at, deleted_at FROM sales_order";

const ITEM_SELECT: &str = "SELECT id, tenant_id, order_id, item_type, item_ref_id, quantity, unit_price, created_at, updated_at FROM sales_item";

const PAYMENT_SELECT: &str = "SELECT id, tenant_id, order_id, method, amount, paid_at, details, created_at, updated_at FROM payment";

/// List filters, combined with AND
#[derive(Debug, Clone, Default)]
pub struct SalesOrderQuery {
    pub status: Option<String>,
    pub client_id: Option<i64>,
    pub day_range: Option<(i64, i64)>,
}

/// Payment list filters
#[derive(Debug, Clone, Default)]
pub struct PaymentQuery {
    pub method: Option<String>,
    pub paid_from: Option<i64>,
    pub paid_until: Option<i64>,
}

pub async fn list(
    pool: &SqlitePool,
    tenant_id: i64,
    query: SalesOrderQuery,
) -> RepoResult<Vec<SalesOrder>> {
    let mut sql = format!("{ORDER_SELECT} WHERE tenant_id = ? AND deleted_at IS NULL");
    if query.status.is_some() {
        sql.push_str(" AND status = ?");
    }
    if query.client_id.is_some() {
        sql.push_str(" AND client_id = ?");
    }
    if query.day_range.is_some() {
        sql.push_str(" AND created_at >= ? AND created_at < ?");
    }
    sql.push_str(" ORDER BY created_at DESC");

    let mut q = sqlx::query_as::<_, SalesOrder>(&sql).bind(tenant_id);
    if let Some(ref status) = query.status {
        q = q.bind(status);
    }
    if let Some(client_id) = query.client_id {
        q = q.bind(client_id);
    }
    if let Some((day_start, day_end)) = query.day_range {
        q = q.bind(day_start).bind(day_end);
    }

    let rows = q.fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
) -> RepoResult<Option<SalesOrderDetail>> {
    let sql = format!("{ORDER_SELECT} WHERE tenant_id = ?1 AND id = ?2 AND deleted_at IS NULL");
    let Some(order) = sqlx::query_as::<_, SalesOrder>(&sql)
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(pool)
        .await?
    else {
        return Ok(None);
    };

    let sql = format!("{ITEM_SELECT} WHERE order_id = ? ORDER BY created_at ASC");
    let items = sqlx::query_as::<_, SalesItem>(&sql)
        .bind(id)
        .fetch_all(pool)
        .await?;

    Ok(Some(SalesOrderDetail { order, items }))
}

async fn ensure_item_ref(
    conn: &mut SqliteConnection,
    tenant_id: i64,
    kind: &str,
    ref_id: i64,
) -> RepoResult<()> {
    match kind {
        item_type::SERVICE => {
            ensure_tenant_record_in(conn, TenantEntity::Service, tenant_id, ref_id).await
        }
        item_type::PRODUCT => {
            ensure_tenant_record_in(conn, TenantEntity::Product, tenant_id, ref_id).await
        }
        other => Err(RepoError::Validation(format!(
            "Unsupported item type: {other}"
        ))),
    }
}

pub async fn create(
    pool: &SqlitePool,
    tenant_id: i64,
    data: SalesOrderCreate,
) -> RepoResult<SalesOrderDetail> {
    if data.items.is_empty() {
        return Err(RepoError::Validation("At least one item is required".into()));
    }

    let order_id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    ensure_tenant_record_in(&mut tx, TenantEntity::Client, tenant_id, data.client_id).await?;
    if let Some(booking_id) = data.booking_id {
        ensure_tenant_record_in(&mut tx, TenantEntity::Booking, tenant_id, booking_id).await?;
    }

    let mut total = 0.0;
    for item in &data.items {
        if item.quantity <= 0 {
            return Err(RepoError::Validation("Item quantity must be positive".into()));
        }
        ensure_item_ref(&mut tx, tenant_id, &item.item_type, item.item_ref_id).await?;
        total += item.quantity as f64 * item.unit_price;
    }
    let total = (total - data.discount).max(0.0);

    sqlx::query(
        "INSERT INTO sales_order (id, tenant_id, client_id, booking_id, status, total, discount, notes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
    )
    .bind(order_id)
    .bind(tenant_id)
    .bind(data.client_id)
    .bind(data.booking_id)
    .bind(order_status::DRAFT)
    .bind(total)
    .bind(data.discount)
    .bind(&data.notes)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    for item in &data.items {
        sqlx::query(
            "INSERT INTO sales_item (id, tenant_id, order_id, item_type, item_ref_id, quantity, unit_price, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
        )
        .bind(shared::util::snowflake_id())
        .bind(tenant_id)
        .bind(order_id)
        .bind(&item.item_type)
        .bind(item.item_ref_id)
        .bind(item.quantity)
        .bind(item.unit_price)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    find_by_id(pool, tenant_id, order_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create sales order".into()))
}

pub async fn update(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    data: SalesOrderUpdate,
) -> RepoResult<SalesOrderDetail> {
    if let Some(ref s) = data.status {
        if !order_status::is_valid(s) {
            return Err(RepoError::Validation(format!("Unknown order status: {s}")));
        }
    }

    let current = find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Sales order {id} not found")))?;

    if data.status.is_none() && data.notes.is_none() {
        return Ok(current);
    }

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE sales_order SET status = COALESCE(?1, status), notes = COALESCE(?2, notes), updated_at = ?3 WHERE tenant_id = ?4 AND id = ?5 AND deleted_at IS NULL",
    )
    .bind(&data.status)
    .bind(&data.notes)
    .bind(now)
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Sales order {id} not found")))
}

pub async fn add_payment(
    pool: &SqlitePool,
    tenant_id: i64,
    order_id: i64,
    data: PaymentCreate,
) -> RepoResult<Payment> {
    if data.amount <= 0.0 {
        return Err(RepoError::Validation("Payment amount must be positive".into()));
    }
    ensure_tenant_record(pool, TenantEntity::SalesOrder, tenant_id, order_id).await?;

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO payment (id, tenant_id, order_id, method, amount, paid_at, details, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(order_id)
    .bind(&data.method)
    .bind(data.amount)
    .bind(data.paid_at.unwrap_or(now))
    .bind(data.details.unwrap_or_else(|| serde_json::json!({})))
    .bind(now)
    .execute(pool)
    .await?;

    let sql = format!("{PAYMENT_SELECT} WHERE tenant_id = ?1 AND id = ?2");
    let payment = sqlx::query_as::<_, Payment>(&sql)
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    payment.ok_or_else(|| RepoError::Database("Failed to record payment".into()))
}

pub async fn list_payments(
    pool: &SqlitePool,
    tenant_id: i64,
    query: PaymentQuery,
) -> RepoResult<Vec<Payment>> {
    let mut sql = format!("{PAYMENT_SELECT} WHERE tenant_id = ?");
    if query.method.is_some() {
        sql.push_str(" AND method = ?");
    }
    if query.paid_from.is_some() {
        sql.push_str(" AND paid_at >= ?");
    }
    if query.paid_until.is_some() {
        sql.push_str(" AND paid_at <= ?");
    }
    sql.push_str(" ORDER BY paid_at DESC");

    let mut q = sqlx::query_as::<_, Payment>(&sql).bind(tenant_id);
    if let Some(ref method) = query.method {
        q = q.bind(method);
    }
    if let Some(paid_from) = query.paid_from {
        q = q.bind(paid_from);
    }
    if let Some(paid_until) = query.paid_until {
        q = q.bind(paid_until);
    }

    let rows = q.fetch_all(pool).await?;
    Ok(rows)
}
