//! Professional Repository

use super::{RepoError, RepoResult};
use shared::models::{Professional, ProfessionalCreate, ProfessionalUpdate};
use sqlx::SqlitePool;

const PROFESSIONAL_SELECT: &str = "SELECT id, tenant_id, user_id, name, specialties, max_parallel, is_active, created_at, updated_at, deleted_at FROM professional";

pub async fn find_all(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<Professional>> {
    let sql = format!(
        "{PROFESSIONAL_SELECT} WHERE tenant_id = ? AND deleted_at IS NULL ORDER BY name ASC"
    );
    let rows = sqlx::query_as::<_, Professional>(&sql)
        .bind(tenant_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
) -> RepoResult<Option<Professional>> {
    let sql =
        format!("{PROFESSIONAL_SELECT} WHERE tenant_id = ?1 AND id = ?2 AND deleted_at IS NULL");
    let row = sqlx::query_as::<_, Professional>(&sql)
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(
    pool: &SqlitePool,
    tenant_id: i64,
    data: ProfessionalCreate,
) -> RepoResult<Professional> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO professional (id, tenant_id, user_id, name, specialties, max_parallel, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(data.user_id)
    .bind(&data.name)
    .bind(data.specialties.unwrap_or_else(|| serde_json::json!([])))
    .bind(data.max_parallel.unwrap_or(1))
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create professional".into()))
}

pub async fn update(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    data: ProfessionalUpdate,
) -> RepoResult<Professional> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE professional SET user_id = COALESCE(?1, user_id), name = COALESCE(?2, name), specialties = COALESCE(?3, specialties), max_parallel = COALESCE(?4, max_parallel), is_active = COALESCE(?5, is_active), updated_at = ?6 WHERE tenant_id = ?7 AND id = ?8 AND deleted_at IS NULL",
    )
    .bind(data.user_id)
    .bind(&data.name)
    .bind(&data.specialties)
    .bind(data.max_parallel)
    .bind(data.is_active)
    .bind(now)
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Professional {id} not found")));
    }
    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Professional {id} not found")))
}

pub async fn delete(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE professional SET deleted_at = ?1, updated_at = ?1 WHERE tenant_id = ?2 AND id = ?3 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
