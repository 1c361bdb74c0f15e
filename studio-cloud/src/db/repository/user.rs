//! User Repository (staff accounts)

use super::RepoResult;
use shared::models::User;
use sqlx::SqlitePool;

const USER_SELECT: &str = "SELECT id, tenant_id, name, email, phone, role, password_hash, is_active, last_login_at, created_at, updated_at FROM user";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE id = ?1");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE email = ?1");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Find a user by email and verify their password. Inactive users and
/// wrong passwords both come back as `None` so login failures are
/// indistinguishable to the caller.
pub async fn authenticate(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> RepoResult<Option<User>> {
    let Some(user) = find_by_email(pool, email).await? else {
        return Ok(None);
    };

    if !user.is_active {
        return Ok(None);
    }

    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let hash = match PasswordHash::new(&user.password_hash) {
        Ok(h) => h,
        Err(_) => return Ok(None),
    };

    if Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
    {
        Ok(Some(user))
    } else {
        Ok(None)
    }
}

pub async fn touch_last_login(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let now = shared::util::now_millis();
    sqlx::query("UPDATE user SET last_login_at = ?1, updated_at = ?1 WHERE id = ?2")
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub(crate) async fn create_in(
    conn: &mut sqlx::SqliteConnection,
    tenant_id: i64,
    name: &str,
    email: &str,
    role: &str,
    password_hash: &str,
) -> RepoResult<i64> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO user (id, tenant_id, name, email, phone, role, password_hash, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, NULL, ?5, ?6, 1, ?7, ?7)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(name)
    .bind(email)
    .bind(role)
    .bind(password_hash)
    .bind(now)
    .execute(&mut *conn)
    .await?;
    Ok(id)
}

/// Guard for registration: email addresses are unique across tenants.
pub async fn email_taken(pool: &SqlitePool, email: &str) -> RepoResult<bool> {
    let taken: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM user WHERE email = ?1)")
        .bind(email)
        .fetch_one(pool)
        .await?;
    Ok(taken)
}
