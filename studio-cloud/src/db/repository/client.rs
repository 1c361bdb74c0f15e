//! Client Repository

use super::RepoResult;
use shared::models::{Client, ClientCreate, ClientUpdate};
use sqlx::SqlitePool;

const CLIENT_SELECT: &str = "SELECT id, tenant_id, name, email, phone, notes, tags, contact, created_at, updated_at, deleted_at FROM client";

pub async fn find_all(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<Client>> {
    let sql = format!(
        "{CLIENT_SELECT} WHERE tenant_id = ? AND deleted_at IS NULL ORDER BY created_at DESC"
    );
    let rows = sqlx::query_as::<_, Client>(&sql)
        .bind(tenant_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn search(pool: &SqlitePool, tenant_id: i64, query: &str) -> RepoResult<Vec<Client>> {
    let pattern = format!("%{query}%");
    let sql = format!(
        "{CLIENT_SELECT} WHERE tenant_id = ?1 AND deleted_at IS NULL AND (name LIKE ?2 OR email LIKE ?2 OR phone LIKE ?2) ORDER BY created_at DESC"
    );
    let rows = sqlx::query_as::<_, Client>(&sql)
        .bind(tenant_id)
        .bind(&pattern)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<Option<Client>> {
    let sql = format!("{CLIENT_SELECT} WHERE tenant_id = ?1 AND id = ?2 AND deleted_at IS NULL");
    let row = sqlx::query_as::<_, Client>(&sql)
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, tenant_id: i64, data: ClientCreate) -> RepoResult<Client> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO client (id, tenant_id, name, email, phone, notes, tags, contact, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.notes)
    .bind(data.tags.unwrap_or_else(|| serde_json::json!([])))
    .bind(data.contact.unwrap_or_else(|| serde_json::json!({})))
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| super::RepoError::Database("Failed to create client".into()))
}

pub async fn update(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    data: ClientUpdate,
) -> RepoResult<Client> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE client SET name = COALESCE(?1, name), email = COALESCE(?2, email), phone = COALESCE(?3, phone), notes = COALESCE(?4, notes), tags = COALESCE(?5, tags), contact = COALESCE(?6, contact), updated_at = ?7 WHERE tenant_id = ?8 AND id = ?9 AND deleted_at IS NULL",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.notes)
    .bind(&data.tags)
    .bind(&data.contact)
    .bind(now)
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(super::RepoError::NotFound(format!("Client {id} not found")));
    }
    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| super::RepoError::NotFound(format!("Client {id} not found")))
}

pub async fn delete(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE client SET deleted_at = ?1, updated_at = ?1 WHERE tenant_id = ?2 AND id = ?3 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
