//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate, ProductUpdate};
use sqlx::SqlitePool;

const PRODUCT_SELECT: &str = "SELECT id, tenant_id, name, sku, price, cost, stock_qty, min_stock, description, metadata, created_at, updated_at, deleted_at FROM product";

pub async fn find_all(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<Product>> {
    let sql =
        format!("{PRODUCT_SELECT} WHERE tenant_id = ? AND deleted_at IS NULL ORDER BY name ASC");
    let rows = sqlx::query_as::<_, Product>(&sql)
        .bind(tenant_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<Option<Product>> {
    let sql = format!("{PRODUCT_SELECT} WHERE tenant_id = ?1 AND id = ?2 AND deleted_at IS NULL");
    let row = sqlx::query_as::<_, Product>(&sql)
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

async fn sku_taken(pool: &SqlitePool, tenant_id: i64, sku: &str, skip_id: i64) -> RepoResult<bool> {
    let taken: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM product WHERE tenant_id = ?1 AND sku = ?2 AND id != ?3 AND deleted_at IS NULL)",
    )
    .bind(tenant_id)
    .bind(sku)
    .bind(skip_id)
    .fetch_one(pool)
    .await?;
    Ok(taken)
}

pub async fn create(pool: &SqlitePool, tenant_id: i64, data: ProductCreate) -> RepoResult<Product> {
    if sku_taken(pool, tenant_id, &data.sku, 0).await? {
        return Err(RepoError::Conflict(format!(
            "SKU \"{}\" already exists",
            data.sku
        )));
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO product (id, tenant_id, name, sku, price, cost, stock_qty, min_stock, description, metadata, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, '{}', ?10, ?10)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(&data.name)
    .bind(&data.sku)
    .bind(data.price)
    .bind(data.cost.unwrap_or(0.0))
    .bind(data.stock_qty.unwrap_or(0))
    .bind(data.min_stock.unwrap_or(0))
    .bind(&data.description)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

pub async fn update(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    data: ProductUpdate,
) -> RepoResult<Product> {
    if let Some(ref sku) = data.sku {
        if sku_taken(pool, tenant_id, sku, id).await? {
            return Err(RepoError::Conflict(format!("SKU \"{sku}\" already exists")));
        }
    }

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE product SET name = COALESCE(?1, name), sku = COALESCE(?2, sku), price = COALESCE(?3, price), cost = COALESCE(?4, cost), stock_qty = COALESCE(?5, stock_qty), min_stock = COALESCE(?6, min_stock), description = COALESCE(?7, description), updated_at = ?8 WHERE tenant_id = ?9 AND id = ?10 AND deleted_at IS NULL",
    )
    .bind(&data.name)
    .bind(&data.sku)
    .bind(data.price)
    .bind(data.cost)
    .bind(data.stock_qty)
    .bind(data.min_stock)
    .bind(&data.description)
    .bind(now)
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

pub async fn delete(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE product SET deleted_at = ?1, updated_at = ?1 WHERE tenant_id = ?2 AND id = ?3 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
