//! Company Repository (tenant bootstrap)

use super::{RepoError, RepoResult, user};
use shared::models::{Company, CompanyRegister, User, user_role};
use sqlx::SqlitePool;

const COMPANY_SELECT: &str = "SELECT id, name, document, timezone, phone, email, settings, metadata, created_at, updated_at FROM company";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Company>> {
    let sql = format!("{COMPANY_SELECT} WHERE id = ?1");
    let row = sqlx::query_as::<_, Company>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Create a tenant together with its first admin user, in one
/// transaction. `password_hash` is already hashed by the caller.
pub async fn register(
    pool: &SqlitePool,
    data: &CompanyRegister,
    password_hash: &str,
) -> RepoResult<(Company, User)> {
    if user::email_taken(pool, &data.email).await? {
        return Err(RepoError::Conflict(format!(
            "Email {} is already registered",
            data.email
        )));
    }

    let company_id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    let timezone = data.timezone.as_deref().unwrap_or("UTC");

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO company (id, name, document, timezone, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
    )
    .bind(company_id)
    .bind(&data.company_name)
    .bind(&data.document)
    .bind(timezone)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    let user_id = user::create_in(
        &mut tx,
        company_id,
        &data.user_name,
        &data.email,
        user_role::ADMIN,
        password_hash,
    )
    .await?;

    tx.commit().await?;

    let company = find_by_id(pool, company_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create company".into()))?;
    let user = user::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))?;
    Ok((company, user))
}
