//! Inventory Repository (stock movements)

use super::tenant_guard::{TenantEntity, ensure_tenant_record_in};
use super::{RepoError, RepoResult};
use shared::models::{InventoryMovement, InventoryMovementCreate, movement_type};
use sqlx::SqlitePool;

const MOVEMENT_SELECT: &str = "SELECT id, tenant_id, product_id, order_id, movement_type, quantity, reason, created_at, updated_at FROM inventory_movement";

/// List filters, combined with AND
#[derive(Debug, Clone, Default)]
pub struct InventoryQuery {
    pub product_id: Option<i64>,
    pub movement_type: Option<String>,
    pub created_from: Option<i64>,
    pub created_until: Option<i64>,
}

pub async fn create(
    pool: &SqlitePool,
    tenant_id: i64,
    data: InventoryMovementCreate,
) -> RepoResult<InventoryMovement> {
    if !movement_type::is_valid(&data.movement_type) {
        return Err(RepoError::Validation(format!(
            "Unknown movement type: {}",
            data.movement_type
        )));
    }
    if data.quantity <= 0 {
        return Err(RepoError::Validation("Quantity must be positive".into()));
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    ensure_tenant_record_in(&mut tx, TenantEntity::Product, tenant_id, data.product_id).await?;
    if let Some(order_id) = data.order_id {
        ensure_tenant_record_in(&mut tx, TenantEntity::SalesOrder, tenant_id, order_id).await?;
    }

    sqlx::query(
        "INSERT INTO inventory_movement (id, tenant_id, product_id, order_id, movement_type, quantity, reason, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(data.product_id)
    .bind(data.order_id)
    .bind(&data.movement_type)
    .bind(data.quantity)
    .bind(&data.reason)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    let sql = format!("{MOVEMENT_SELECT} WHERE tenant_id = ?1 AND id = ?2");
    let movement = sqlx::query_as::<_, InventoryMovement>(&sql)
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    movement.ok_or_else(|| RepoError::Database("Failed to record inventory movement".into()))
}

pub async fn list(
    pool: &SqlitePool,
    tenant_id: i64,
    query: InventoryQuery,
) -> RepoResult<Vec<InventoryMovement>> {
    let mut sql = format!("{MOVEMENT_SELECT} WHERE tenant_id = ?");
    if query.product_id.is_some() {
        sql.push_str(" AND product_id = ?");
    }
    if query.movement_type.is_some() {
        sql.push_str(" AND movement_type = ?");
    }
    if query.created_from.is_some() {
        sql.push_str(" AND created_at >= ?");
    }
    if query.created_until.is_some() {
        sql.push_str(" AND created_at <= ?");
    }
    sql.push_str(" ORDER BY created_at DESC");

    let mut q = sqlx::query_as::<_, InventoryMovement>(&sql).bind(tenant_id);
    if let Some(product_id) = query.product_id {
        q = q.bind(product_id);
    }
    if let Some(ref movement_type) = query.movement_type {
        q = q.bind(movement_type);
    }
    if let Some(created_from) = query.created_from {
        q = q.bind(created_from);
    }
    if let Some(created_until) = query.created_until {
        q = q.bind(created_until);
    }

    let rows = q.fetch_all(pool).await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testutil::*;

    #[tokio::test]
    async fn create_validates_type_quantity_and_tenant() {
        let pool = test_pool().await;
        let tenant = seed_company(&pool, "Studio A").await;
        let tenant_b = seed_company(&pool, "Studio B").await;
        let product = seed_product(&pool, tenant, "Shampoo", "SKU-1").await;

        let movement = create(
            &pool,
            tenant,
            InventoryMovementCreate {
                product_id: product,
                order_id: None,
                movement_type: "in".into(),
                quantity: 10,
                reason: Some("restock".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(movement.movement_type, "in");

        let err = create(
            &pool,
            tenant,
            InventoryMovementCreate {
                product_id: product,
                order_id: None,
                movement_type: "teleport".into(),
                quantity: 1,
                reason: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        let err = create(
            &pool,
            tenant,
            InventoryMovementCreate {
                product_id: product,
                order_id: None,
                movement_type: "out".into(),
                quantity: 0,
                reason: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        // Product of another tenant is invisible
        let err = create(
            &pool,
            tenant_b,
            InventoryMovementCreate {
                product_id: product,
                order_id: None,
                movement_type: "in".into(),
                quantity: 1,
                reason: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_filters_by_product_and_type() {
        let pool = test_pool().await;
        let tenant = seed_company(&pool, "Studio A").await;
        let shampoo = seed_product(&pool, tenant, "Shampoo", "SKU-1").await;
        let wax = seed_product(&pool, tenant, "Wax", "SKU-2").await;

        for (product, kind, qty) in [(shampoo, "in", 10), (shampoo, "out", 2), (wax, "in", 5)] {
            create(
                &pool,
                tenant,
                InventoryMovementCreate {
                    product_id: product,
                    order_id: None,
                    movement_type: kind.into(),
                    quantity: qty,
                    reason: None,
                },
            )
            .await
            .unwrap();
        }

        let all = list(&pool, tenant, InventoryQuery::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let shampoo_only = list(
            &pool,
            tenant,
            InventoryQuery {
                product_id: Some(shampoo),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(shampoo_only.len(), 2);

        let incoming = list(
            &pool,
            tenant,
            InventoryQuery {
                movement_type: Some("in".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(incoming.len(), 2);
    }
}
