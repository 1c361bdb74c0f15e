//! Service Repository (catalog)

use super::{RepoError, RepoResult};
use shared::models::{Service, ServiceCreate, ServiceUpdate};
use sqlx::SqlitePool;

const SERVICE_SELECT: &str = "SELECT id, tenant_id, name, category, description, duration_minutes, price, color, metadata, created_at, updated_at, deleted_at FROM service";

pub async fn find_all(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<Service>> {
    let sql =
        format!("{SERVICE_SELECT} WHERE tenant_id = ? AND deleted_at IS NULL ORDER BY name ASC");
    let rows = sqlx::query_as::<_, Service>(&sql)
        .bind(tenant_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<Option<Service>> {
    let sql = format!("{SERVICE_SELECT} WHERE tenant_id = ?1 AND id = ?2 AND deleted_at IS NULL");
    let row = sqlx::query_as::<_, Service>(&sql)
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

async fn name_taken(pool: &SqlitePool, tenant_id: i64, name: &str, skip_id: i64) -> RepoResult<bool> {
    let taken: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM service WHERE tenant_id = ?1 AND name = ?2 AND id != ?3 AND deleted_at IS NULL)",
    )
    .bind(tenant_id)
    .bind(name)
    .bind(skip_id)
    .fetch_one(pool)
    .await?;
    Ok(taken)
}

pub async fn create(pool: &SqlitePool, tenant_id: i64, data: ServiceCreate) -> RepoResult<Service> {
    // duration feeds the booking end-time fallback, zero would collapse
    // intervals
    if data.duration_minutes <= 0 {
        return Err(RepoError::Validation(
            "Service duration must be positive".into(),
        ));
    }
    if name_taken(pool, tenant_id, &data.name, 0).await? {
        return Err(RepoError::Conflict(format!(
            "Service \"{}\" already exists",
            data.name
        )));
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO service (id, tenant_id, name, category, description, duration_minutes, price, color, metadata, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, '{}', ?9, ?9)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(&data.name)
    .bind(&data.category)
    .bind(&data.description)
    .bind(data.duration_minutes)
    .bind(data.price)
    .bind(&data.color)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create service".into()))
}

pub async fn update(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    data: ServiceUpdate,
) -> RepoResult<Service> {
    if let Some(minutes) = data.duration_minutes {
        if minutes <= 0 {
            return Err(RepoError::Validation(
                "Service duration must be positive".into(),
            ));
        }
    }
    if let Some(ref name) = data.name {
        if name_taken(pool, tenant_id, name, id).await? {
            return Err(RepoError::Conflict(format!(
                "Service \"{name}\" already exists"
            )));
        }
    }

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE service SET name = COALESCE(?1, name), category = COALESCE(?2, category), description = COALESCE(?3, description), duration_minutes = COALESCE(?4, duration_minutes), price = COALESCE(?5, price), color = COALESCE(?6, color), updated_at = ?7 WHERE tenant_id = ?8 AND id = ?9 AND deleted_at IS NULL",
    )
    .bind(&data.name)
    .bind(&data.category)
    .bind(&data.description)
    .bind(data.duration_minutes)
    .bind(data.price)
    .bind(&data.color)
    .bind(now)
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Service {id} not found")));
    }
    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Service {id} not found")))
}

pub async fn delete(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE service SET deleted_at = ?1, updated_at = ?1 WHERE tenant_id = ?2 AND id = ?3 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
