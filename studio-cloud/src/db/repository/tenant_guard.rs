//! Tenant record guard
//!
//! The enforcement primitive behind cross-entity references: before a
//! booking (or sales order, or inventory movement) may point at another
//! row, the referenced row must exist AND belong to the caller's tenant.
//! One generic check parameterized by a table selector instead of a
//! near-duplicate function per entity.

use super::{RepoError, RepoResult};
use sqlx::{SqliteConnection, SqlitePool};

/// Entity selector for tenant-scoped existence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantEntity {
    Client,
    Professional,
    Service,
    Product,
    Booking,
    SalesOrder,
}

impl TenantEntity {
    fn table(self) -> &'static str {
        match self {
            TenantEntity::Client => "client",
            TenantEntity::Professional => "professional",
            TenantEntity::Service => "service",
            TenantEntity::Product => "product",
            TenantEntity::Booking => "booking",
            TenantEntity::SalesOrder => "sales_order",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TenantEntity::Client => "Client",
            TenantEntity::Professional => "Professional",
            TenantEntity::Service => "Service",
            TenantEntity::Product => "Product",
            TenantEntity::Booking => "Booking",
            TenantEntity::SalesOrder => "Sales order",
        }
    }
}

/// Verify that `id` exists in the entity's table and belongs to
/// `tenant_id`. Read-only; a miss (absent row or foreign tenant) is a
/// typed NotFound naming the entity, never a bare storage error.
pub async fn ensure_tenant_record(
    pool: &SqlitePool,
    entity: TenantEntity,
    tenant_id: i64,
    id: i64,
) -> RepoResult<()> {
    let mut conn = pool.acquire().await?;
    ensure_tenant_record_in(&mut conn, entity, tenant_id, id).await
}

/// Transaction-scoped variant, used when the guard must run in the same
/// transaction as the write that depends on it.
pub async fn ensure_tenant_record_in(
    conn: &mut SqliteConnection,
    entity: TenantEntity,
    tenant_id: i64,
    id: i64,
) -> RepoResult<()> {
    // The scoping predicate is `tenant_id = ? AND id = ?`, never bare id
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE tenant_id = ?1 AND id = ?2 AND deleted_at IS NULL)",
        entity.table()
    );
    let exists: bool = sqlx::query_scalar(&sql)
        .bind(tenant_id)
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;

    if exists {
        Ok(())
    } else {
        Err(RepoError::NotFound(format!(
            "{} {} not found",
            entity.label(),
            id
        )))
    }
}
