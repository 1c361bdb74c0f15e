//! Booking Repository
//!
//! Scheduling core: conflict detection over a professional's timeline
//! plus the booking lifecycle (create / update / cancel / list, admin
//! variants). Create and update run their tenant checks, the conflict
//! check and the write inside one transaction, so two concurrent
//! requests for overlapping slots cannot both pass the check.

use super::tenant_guard::{TenantEntity, ensure_tenant_record_in};
use super::{RepoError, RepoResult};
use shared::models::{Booking, BookingCreate, BookingUpdate, booking_status};
use sqlx::{SqliteConnection, SqlitePool};

const BOOKING_SELECT: &str = "SELECT id, tenant_id, client_id, professional_id, service_id, status, start_at, end_at, notes, metadata, created_at, updated_at, deleted_at FROM booking";

/// List filters, combined with AND. `day_range` is `[start, end)` in
/// epoch millis, precomputed by the caller from a calendar date.
#[derive(Debug, Clone, Default)]
pub struct BookingQuery {
    pub day_range: Option<(i64, i64)>,
    pub professional_id: Option<i64>,
    pub status: Option<String>,
}

pub async fn find_by_id(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<Option<Booking>> {
    let mut conn = pool.acquire().await?;
    find_by_id_in(&mut conn, tenant_id, id).await
}

async fn find_by_id_in(
    conn: &mut SqliteConnection,
    tenant_id: i64,
    id: i64,
) -> RepoResult<Option<Booking>> {
    let sql = format!("{BOOKING_SELECT} WHERE tenant_id = ?1 AND id = ?2 AND deleted_at IS NULL");
    let row = sqlx::query_as::<_, Booking>(&sql)
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

/// First active booking of `professional_id` overlapping
/// `[start_at, end_at)`, if any. Half-open semantics: touching intervals
/// do not overlap. Canceled and soft-deleted bookings never conflict.
/// `exclude_id` skips the booking being moved so it cannot conflict with
/// itself. Runs on the caller's connection so create/update can hold it
/// inside their write transaction.
async fn find_conflict_in(
    conn: &mut SqliteConnection,
    tenant_id: i64,
    professional_id: i64,
    start_at: i64,
    end_at: i64,
    exclude_id: Option<i64>,
) -> RepoResult<Option<Booking>> {
    let mut sql = format!(
        "{BOOKING_SELECT} WHERE tenant_id = ?1 AND professional_id = ?2 AND deleted_at IS NULL AND status != '{}' AND start_at < ?3 AND end_at > ?4",
        booking_status::CANCELED
    );
    if exclude_id.is_some() {
        sql.push_str(" AND id != ?5");
    }
    sql.push_str(" ORDER BY start_at ASC LIMIT 1");

    let mut query = sqlx::query_as::<_, Booking>(&sql)
        .bind(tenant_id)
        .bind(professional_id)
        .bind(end_at)
        .bind(start_at);
    if let Some(id) = exclude_id {
        query = query.bind(id);
    }

    Ok(query.fetch_optional(&mut *conn).await?)
}

pub async fn create(pool: &SqlitePool, tenant_id: i64, data: BookingCreate) -> RepoResult<Booking> {
    let status = match data.status {
        Some(s) => {
            if !booking_status::is_valid(&s) {
                return Err(RepoError::Validation(format!("Unknown booking status: {s}")));
            }
            s
        }
        None => booking_status::PENDING.to_string(),
    };

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    ensure_tenant_record_in(&mut tx, TenantEntity::Client, tenant_id, data.client_id).await?;
    ensure_tenant_record_in(
        &mut tx,
        TenantEntity::Professional,
        tenant_id,
        data.professional_id,
    )
    .await?;

    // An explicit valid end wins; otherwise derive it from the service
    // duration
    let end_at = match data.end_at {
        Some(end) if end > data.start_at => end,
        _ => {
            let minutes: Option<i64> = sqlx::query_scalar(
                "SELECT duration_minutes FROM service WHERE tenant_id = ?1 AND id = ?2 AND deleted_at IS NULL",
            )
            .bind(tenant_id)
            .bind(data.service_id)
            .fetch_optional(&mut *tx)
            .await?;
            let minutes = minutes.ok_or_else(|| {
                RepoError::NotFound(format!("Service {} not found", data.service_id))
            })?;
            data.start_at + minutes * 60_000
        }
    };
    if end_at <= data.start_at {
        return Err(RepoError::Validation(
            "Booking end time must be after start time".into(),
        ));
    }

    if let Some(existing) = find_conflict_in(
        &mut tx,
        tenant_id,
        data.professional_id,
        data.start_at,
        end_at,
        None,
    )
    .await?
    {
        return Err(RepoError::Conflict(format!(
            "Professional {} already has booking {} in this slot",
            data.professional_id, existing.id
        )));
    }

    sqlx::query(
        "INSERT INTO booking (id, tenant_id, client_id, professional_id, service_id, status, start_at, end_at, notes, metadata, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(data.client_id)
    .bind(data.professional_id)
    .bind(data.service_id)
    .bind(&status)
    .bind(data.start_at)
    .bind(end_at)
    .bind(&data.notes)
    .bind(serde_json::json!({}))
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create booking".into()))
}

pub async fn update(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    data: BookingUpdate,
) -> RepoResult<Booking> {
    if let Some(ref s) = data.status {
        if !booking_status::is_valid(s) {
            return Err(RepoError::Validation(format!("Unknown booking status: {s}")));
        }
    }

    let mut tx = pool.begin().await?;

    let current = find_by_id_in(&mut tx, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Booking {id} not found")))?;

    // Re-check the timeline only when the interval moves; the unspecified
    // side keeps its current value, and the booking never conflicts with
    // itself
    if data.start_at.is_some() || data.end_at.is_some() {
        let start_at = data.start_at.unwrap_or(current.start_at);
        let end_at = data.end_at.unwrap_or(current.end_at);
        if end_at <= start_at {
            return Err(RepoError::Validation(
                "Booking end time must be after start time".into(),
            ));
        }
        if let Some(existing) = find_conflict_in(
            &mut tx,
            tenant_id,
            current.professional_id,
            start_at,
            end_at,
            Some(id),
        )
        .await?
        {
            return Err(RepoError::Conflict(format!(
                "Professional {} already has booking {} in this slot",
                current.professional_id, existing.id
            )));
        }
    }

    // Sparse update: nothing provided is a no-op success, no write
    if data.status.is_none()
        && data.start_at.is_none()
        && data.end_at.is_none()
        && data.notes.is_none()
    {
        return Ok(current);
    }

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE booking SET status = COALESCE(?1, status), start_at = COALESCE(?2, start_at), end_at = COALESCE(?3, end_at), notes = COALESCE(?4, notes), updated_at = ?5 WHERE tenant_id = ?6 AND id = ?7",
    )
    .bind(&data.status)
    .bind(data.start_at)
    .bind(data.end_at)
    .bind(&data.notes)
    .bind(now)
    .bind(tenant_id)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Booking {id} not found")))
}

/// Cancel a booking, recording the reason under `cancel_reason` in its
/// metadata. The row stays; canceled bookings free the slot for new
/// bookings but keep their history.
pub async fn cancel(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
    reason: Option<String>,
) -> RepoResult<Booking> {
    let mut tx = pool.begin().await?;

    let current = find_by_id_in(&mut tx, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Booking {id} not found")))?;

    let mut metadata = match current.metadata {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    if let Some(reason) = reason.filter(|r| !r.is_empty()) {
        metadata.insert("cancel_reason".into(), serde_json::Value::String(reason));
    }

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE booking SET status = ?1, metadata = ?2, updated_at = ?3 WHERE tenant_id = ?4 AND id = ?5",
    )
    .bind(booking_status::CANCELED)
    .bind(serde_json::Value::Object(metadata))
    .bind(now)
    .bind(tenant_id)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Booking {id} not found")))
}

pub async fn list(
    pool: &SqlitePool,
    tenant_id: i64,
    query: BookingQuery,
) -> RepoResult<Vec<Booking>> {
    let mut sql = format!("{BOOKING_SELECT} WHERE tenant_id = ? AND deleted_at IS NULL");
    if query.status.is_some() {
        sql.push_str(" AND status = ?");
    }
    if query.professional_id.is_some() {
        sql.push_str(" AND professional_id = ?");
    }
    if query.day_range.is_some() {
        sql.push_str(" AND start_at >= ? AND start_at < ?");
    }
    sql.push_str(" ORDER BY start_at ASC");

    let mut q = sqlx::query_as::<_, Booking>(&sql).bind(tenant_id);
    if let Some(ref status) = query.status {
        q = q.bind(status);
    }
    if let Some(professional_id) = query.professional_id {
        q = q.bind(professional_id);
    }
    if let Some((day_start, day_end)) = query.day_range {
        q = q.bind(day_start).bind(day_end);
    }

    let rows = q.fetch_all(pool).await?;
    Ok(rows)
}

/// Soft delete (tenant-facing): marks the row, keeps it recoverable.
pub async fn delete(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE booking SET deleted_at = ?1, updated_at = ?1 WHERE tenant_id = ?2 AND id = ?3 AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(tenant_id)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

// ========== Administrative (cross-tenant) variants ==========

/// Back-office list across all tenants, same filters as `list`.
pub async fn admin_list(pool: &SqlitePool, query: BookingQuery) -> RepoResult<Vec<Booking>> {
    let mut sql = format!("{BOOKING_SELECT} WHERE deleted_at IS NULL");
    if query.status.is_some() {
        sql.push_str(" AND status = ?");
    }
    if query.professional_id.is_some() {
        sql.push_str(" AND professional_id = ?");
    }
    if query.day_range.is_some() {
        sql.push_str(" AND start_at >= ? AND start_at < ?");
    }
    sql.push_str(" ORDER BY start_at ASC");

    let mut q = sqlx::query_as::<_, Booking>(&sql);
    if let Some(ref status) = query.status {
        q = q.bind(status);
    }
    if let Some(professional_id) = query.professional_id {
        q = q.bind(professional_id);
    }
    if let Some((day_start, day_end)) = query.day_range {
        q = q.bind(day_start).bind(day_end);
    }

    let rows = q.fetch_all(pool).await?;
    Ok(rows)
}

/// Back-office update: the tenant is taken from the booking itself, then
/// the normal (conflict-checked) update path runs.
pub async fn admin_update(pool: &SqlitePool, id: i64, data: BookingUpdate) -> RepoResult<Booking> {
    let sql = format!("{BOOKING_SELECT} WHERE id = ?1 AND deleted_at IS NULL");
    let booking = sqlx::query_as::<_, Booking>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Booking {id} not found")))?;

    update(pool, booking.tenant_id, id, data).await
}

/// Back-office hard delete. Irreversible, unlike the tenant-facing soft
/// delete.
pub async fn admin_delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM booking WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testutil::*;

    const HOUR: i64 = 3_600_000;
    const MINUTE: i64 = 60_000;
    // 2025-06-02 00:00:00 UTC, a Monday
    const DAY: i64 = 1_748_822_400_000;

    struct Fixture {
        pool: SqlitePool,
        tenant: i64,
        client: i64,
        professional: i64,
        service: i64,
    }

    async fn fixture() -> Fixture {
        let pool = test_pool().await;
        let tenant = seed_company(&pool, "Studio A").await;
        let client = seed_client(&pool, tenant, "Ana").await;
        let professional = seed_professional(&pool, tenant, "Bia").await;
        let service = seed_service(&pool, tenant, "Haircut", 30).await;
        Fixture {
            pool,
            tenant,
            client,
            professional,
            service,
        }
    }

    fn booking_at(f: &Fixture, start_at: i64, end_at: Option<i64>) -> BookingCreate {
        BookingCreate {
            client_id: f.client,
            professional_id: f.professional,
            service_id: f.service,
            status: None,
            start_at,
            end_at,
            notes: None,
        }
    }

    #[tokio::test]
    async fn create_derives_end_from_service_duration() {
        let f = fixture().await;
        let start = DAY + 10 * HOUR;

        let booking = create(&f.pool, f.tenant, booking_at(&f, start, None))
            .await
            .unwrap();
        assert_eq!(booking.status, booking_status::PENDING);
        assert_eq!(booking.end_at, start + 30 * MINUTE);
        assert_eq!(booking.metadata, serde_json::json!({}));
    }

    #[tokio::test]
    async fn create_prefers_explicit_valid_end_over_duration() {
        let f = fixture().await;
        let start = DAY + 10 * HOUR;

        let booking = create(
            &f.pool,
            f.tenant,
            booking_at(&f, start, Some(start + 2 * HOUR)),
        )
        .await
        .unwrap();
        assert_eq!(booking.end_at, start + 2 * HOUR);
    }

    #[tokio::test]
    async fn create_falls_back_to_duration_when_end_precedes_start() {
        let f = fixture().await;
        let start = DAY + 10 * HOUR;

        // An end before start is treated as absent, not an error
        let booking = create(&f.pool, f.tenant, booking_at(&f, start, Some(start - HOUR)))
            .await
            .unwrap();
        assert_eq!(booking.end_at, start + 30 * MINUTE);
    }

    #[tokio::test]
    async fn create_rejects_overlapping_interval() {
        let f = fixture().await;
        let start = DAY + 10 * HOUR;

        create(&f.pool, f.tenant, booking_at(&f, start, None))
            .await
            .unwrap();

        // 10:15 overlaps the 10:00-10:30 slot
        let err = create(&f.pool, f.tenant, booking_at(&f, start + 15 * MINUTE, None))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));

        // Nothing was persisted for the rejected attempt
        let all = list(&f.pool, f.tenant, BookingQuery::default()).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn touching_intervals_do_not_conflict() {
        let f = fixture().await;
        let start = DAY + 10 * HOUR;

        create(&f.pool, f.tenant, booking_at(&f, start, None))
            .await
            .unwrap();

        // 10:30 starts exactly where the first ends — allowed
        let booking = create(&f.pool, f.tenant, booking_at(&f, start + 30 * MINUTE, None))
            .await
            .unwrap();
        assert_eq!(booking.start_at, start + 30 * MINUTE);
    }

    #[tokio::test]
    async fn bookings_of_other_professionals_do_not_conflict() {
        let f = fixture().await;
        let other_pro = seed_professional(&f.pool, f.tenant, "Caio").await;
        let start = DAY + 10 * HOUR;

        create(&f.pool, f.tenant, booking_at(&f, start, None))
            .await
            .unwrap();

        let mut data = booking_at(&f, start, None);
        data.professional_id = other_pro;
        create(&f.pool, f.tenant, data).await.unwrap();
    }

    #[tokio::test]
    async fn create_rejects_references_from_another_tenant() {
        let f = fixture().await;
        let tenant_b = seed_company(&f.pool, "Studio B").await;
        let foreign_client = seed_client(&f.pool, tenant_b, "Carla").await;
        let start = DAY + 10 * HOUR;

        let mut data = booking_at(&f, start, None);
        data.client_id = foreign_client;
        let err = create(&f.pool, f.tenant, data).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));

        // Foreign professional fails the same way
        let foreign_pro = seed_professional(&f.pool, tenant_b, "Duda").await;
        let mut data = booking_at(&f, start, None);
        data.professional_id = foreign_pro;
        let err = create(&f.pool, f.tenant, data).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));

        // Foreign service fails when the duration fallback needs it
        let foreign_service = seed_service(&f.pool, tenant_b, "Massage", 60).await;
        let mut data = booking_at(&f, start, None);
        data.service_id = foreign_service;
        let err = create(&f.pool, f.tenant, data).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_rejects_unknown_status() {
        let f = fixture().await;
        let mut data = booking_at(&f, DAY + 10 * HOUR, None);
        data.status = Some("scheduled".into());
        let err = create(&f.pool, f.tenant, data).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn update_moves_interval_with_conflict_check() {
        let f = fixture().await;
        let slot1 = DAY + 10 * HOUR;
        let slot2 = DAY + 14 * HOUR;

        let first = create(&f.pool, f.tenant, booking_at(&f, slot1, None))
            .await
            .unwrap();
        let second = create(&f.pool, f.tenant, booking_at(&f, slot2, None))
            .await
            .unwrap();

        // Moving the second onto the first fails and leaves it untouched
        let err = update(
            &f.pool,
            f.tenant,
            second.id,
            BookingUpdate {
                start_at: Some(slot1 + 15 * MINUTE),
                end_at: Some(slot1 + 45 * MINUTE),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));
        let unchanged = find_by_id(&f.pool, f.tenant, second.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.start_at, slot2);

        // Moving to a free slot succeeds; the omitted end keeps its value
        let moved = update(
            &f.pool,
            f.tenant,
            second.id,
            BookingUpdate {
                start_at: Some(DAY + 16 * HOUR),
                end_at: Some(DAY + 16 * HOUR + 30 * MINUTE),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(moved.start_at, DAY + 16 * HOUR);

        // Status-only transition still works
        let confirmed = update(
            &f.pool,
            f.tenant,
            first.id,
            BookingUpdate {
                status: Some(booking_status::CONFIRMED.into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(confirmed.status, booking_status::CONFIRMED);
    }

    #[tokio::test]
    async fn update_excludes_own_interval_from_conflict() {
        let f = fixture().await;
        let start = DAY + 10 * HOUR;
        let booking = create(&f.pool, f.tenant, booking_at(&f, start, None))
            .await
            .unwrap();

        // Notes-only update must not self-conflict
        let updated = update(
            &f.pool,
            f.tenant,
            booking.id,
            BookingUpdate {
                notes: Some("bring the good scissors".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.notes.as_deref(), Some("bring the good scissors"));

        // Nudging the interval within itself must not self-conflict either
        let nudged = update(
            &f.pool,
            f.tenant,
            booking.id,
            BookingUpdate {
                start_at: Some(start + 5 * MINUTE),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(nudged.start_at, start + 5 * MINUTE);
    }

    #[tokio::test]
    async fn update_with_no_fields_is_a_no_op() {
        let f = fixture().await;
        let booking = create(&f.pool, f.tenant, booking_at(&f, DAY + 10 * HOUR, None))
            .await
            .unwrap();

        let untouched = update(&f.pool, f.tenant, booking.id, BookingUpdate::default())
            .await
            .unwrap();
        assert_eq!(untouched.status, booking.status);
        assert_eq!(untouched.updated_at, booking.updated_at);
    }

    #[tokio::test]
    async fn update_rejects_inverted_interval() {
        let f = fixture().await;
        let start = DAY + 10 * HOUR;
        let booking = create(&f.pool, f.tenant, booking_at(&f, start, None))
            .await
            .unwrap();

        let err = update(
            &f.pool,
            f.tenant,
            booking.id,
            BookingUpdate {
                end_at: Some(start - HOUR),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn update_is_tenant_scoped() {
        let f = fixture().await;
        let tenant_b = seed_company(&f.pool, "Studio B").await;
        let booking = create(&f.pool, f.tenant, booking_at(&f, DAY + 10 * HOUR, None))
            .await
            .unwrap();

        let err = update(
            &f.pool,
            tenant_b,
            booking.id,
            BookingUpdate {
                notes: Some("hijack".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn cancel_records_reason_and_frees_the_slot() {
        let f = fixture().await;
        let start = DAY + 10 * HOUR;
        let booking = create(&f.pool, f.tenant, booking_at(&f, start, None))
            .await
            .unwrap();

        let canceled = cancel(&f.pool, f.tenant, booking.id, Some("no show".into()))
            .await
            .unwrap();
        assert_eq!(canceled.status, booking_status::CANCELED);
        assert_eq!(canceled.metadata["cancel_reason"], "no show");

        // The identical slot can be booked again
        let rebooked = create(&f.pool, f.tenant, booking_at(&f, start, None))
            .await
            .unwrap();
        assert_eq!(rebooked.start_at, start);
    }

    #[tokio::test]
    async fn cancel_preserves_existing_metadata_keys() {
        let f = fixture().await;
        let booking = create(&f.pool, f.tenant, booking_at(&f, DAY + 10 * HOUR, None))
            .await
            .unwrap();
        sqlx::query("UPDATE booking SET metadata = ?1 WHERE id = ?2")
            .bind(serde_json::json!({"source": "walk-in"}))
            .bind(booking.id)
            .execute(&f.pool)
            .await
            .unwrap();

        let canceled = cancel(&f.pool, f.tenant, booking.id, Some("client sick".into()))
            .await
            .unwrap();
        assert_eq!(canceled.metadata["source"], "walk-in");
        assert_eq!(canceled.metadata["cancel_reason"], "client sick");

        // An empty reason leaves metadata untouched
        let booking2 = create(&f.pool, f.tenant, booking_at(&f, DAY + 12 * HOUR, None))
            .await
            .unwrap();
        let canceled2 = cancel(&f.pool, f.tenant, booking2.id, Some(String::new()))
            .await
            .unwrap();
        assert!(canceled2.metadata.get("cancel_reason").is_none());
    }

    #[tokio::test]
    async fn list_applies_conjunctive_filters_in_start_order() {
        let f = fixture().await;
        let pro2 = seed_professional(&f.pool, f.tenant, "Caio").await;

        // Same day, out of order; plus one the next day and one done
        let b_late = create(&f.pool, f.tenant, booking_at(&f, DAY + 15 * HOUR, None))
            .await
            .unwrap();
        let b_early = create(&f.pool, f.tenant, booking_at(&f, DAY + 9 * HOUR, None))
            .await
            .unwrap();
        let mut next_day = booking_at(&f, DAY + 26 * HOUR, None);
        next_day.professional_id = pro2;
        create(&f.pool, f.tenant, next_day).await.unwrap();

        let day_only = list(
            &f.pool,
            f.tenant,
            BookingQuery {
                day_range: Some((DAY, DAY + 24 * HOUR)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(
            day_only.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![b_early.id, b_late.id]
        );

        update(
            &f.pool,
            f.tenant,
            b_early.id,
            BookingUpdate {
                status: Some(booking_status::DONE.into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let filtered = list(
            &f.pool,
            f.tenant,
            BookingQuery {
                day_range: Some((DAY, DAY + 24 * HOUR)),
                professional_id: Some(f.professional),
                status: Some(booking_status::DONE.into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, b_early.id);
    }

    #[tokio::test]
    async fn list_never_leaks_other_tenants() {
        let f = fixture().await;
        let tenant_b = seed_company(&f.pool, "Studio B").await;
        let client_b = seed_client(&f.pool, tenant_b, "Carla").await;
        let pro_b = seed_professional(&f.pool, tenant_b, "Duda").await;
        let service_b = seed_service(&f.pool, tenant_b, "Massage", 60).await;

        create(&f.pool, f.tenant, booking_at(&f, DAY + 10 * HOUR, None))
            .await
            .unwrap();
        create(
            &f.pool,
            tenant_b,
            BookingCreate {
                client_id: client_b,
                professional_id: pro_b,
                service_id: service_b,
                status: None,
                start_at: DAY + 10 * HOUR,
                end_at: None,
                notes: None,
            },
        )
        .await
        .unwrap();

        let mine = list(&f.pool, f.tenant, BookingQuery::default()).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].tenant_id, f.tenant);

        // Admin sees both
        let all = admin_list(&f.pool, BookingQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn soft_delete_hides_the_row_and_frees_the_slot() {
        let f = fixture().await;
        let start = DAY + 10 * HOUR;
        let booking = create(&f.pool, f.tenant, booking_at(&f, start, None))
            .await
            .unwrap();

        assert!(delete(&f.pool, f.tenant, booking.id).await.unwrap());
        assert!(find_by_id(&f.pool, f.tenant, booking.id).await.unwrap().is_none());
        // Second delete is a no-op
        assert!(!delete(&f.pool, f.tenant, booking.id).await.unwrap());

        // The row still exists physically (recoverable)
        let raw: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM booking WHERE id = ?")
            .bind(booking.id)
            .fetch_one(&f.pool)
            .await
            .unwrap();
        assert_eq!(raw, 1);

        // And its interval no longer blocks the timeline
        create(&f.pool, f.tenant, booking_at(&f, start, None))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn admin_update_resolves_tenant_from_the_booking() {
        let f = fixture().await;
        let booking = create(&f.pool, f.tenant, booking_at(&f, DAY + 10 * HOUR, None))
            .await
            .unwrap();

        let updated = admin_update(
            &f.pool,
            booking.id,
            BookingUpdate {
                status: Some(booking_status::CONFIRMED.into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.tenant_id, f.tenant);
        assert_eq!(updated.status, booking_status::CONFIRMED);
    }

    #[tokio::test]
    async fn admin_delete_removes_the_row_outright() {
        let f = fixture().await;
        let booking = create(&f.pool, f.tenant, booking_at(&f, DAY + 10 * HOUR, None))
            .await
            .unwrap();

        assert!(admin_delete(&f.pool, booking.id).await.unwrap());
        let raw: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM booking WHERE id = ?")
            .bind(booking.id)
            .fetch_one(&f.pool)
            .await
            .unwrap();
        assert_eq!(raw, 0);
        assert!(!admin_delete(&f.pool, booking.id).await.unwrap());
    }

    #[tokio::test]
    async fn detector_half_open_and_exclusion_semantics() {
        let f = fixture().await;
        let start = DAY + 10 * HOUR;
        let booked = create(&f.pool, f.tenant, booking_at(&f, start, None))
            .await
            .unwrap(); // occupies [10:00, 10:30)
        let other_tenant = seed_company(&f.pool, "Studio B").await;

        let mut conn = f.pool.acquire().await.unwrap();

        // Touching at either boundary is free
        let after = find_conflict_in(
            &mut conn,
            f.tenant,
            f.professional,
            start + 30 * MINUTE,
            start + HOUR,
            None,
        )
        .await
        .unwrap();
        assert!(after.is_none());
        let before =
            find_conflict_in(&mut conn, f.tenant, f.professional, start - HOUR, start, None)
                .await
                .unwrap();
        assert!(before.is_none());

        // One millisecond of overlap is a conflict, and the offending
        // record comes back for diagnostics
        let overlap = find_conflict_in(
            &mut conn,
            f.tenant,
            f.professional,
            start + 30 * MINUTE - 1,
            start + HOUR,
            None,
        )
        .await
        .unwrap();
        assert_eq!(overlap.map(|b| b.id), Some(booked.id));

        // Excluding the booking's own id silences the self-conflict
        let own = find_conflict_in(
            &mut conn,
            f.tenant,
            f.professional,
            start,
            start + 30 * MINUTE,
            Some(booked.id),
        )
        .await
        .unwrap();
        assert!(own.is_none());

        // Another tenant's timeline is fully independent
        let foreign = find_conflict_in(
            &mut conn,
            other_tenant,
            f.professional,
            start,
            start + 30 * MINUTE,
            None,
        )
        .await
        .unwrap();
        assert!(foreign.is_none());
    }

    #[tokio::test]
    async fn scheduling_scenario_end_to_end() {
        // Create 10:00 (30m service) → end 10:30; 10:15 conflicts;
        // 10:30 touches and succeeds; cancel 10:00 frees the slot.
        let f = fixture().await;
        let ten = DAY + 10 * HOUR;

        let first = create(&f.pool, f.tenant, booking_at(&f, ten, None))
            .await
            .unwrap();
        assert_eq!(first.end_at, ten + 30 * MINUTE);
        assert_eq!(first.status, booking_status::PENDING);

        let err = create(&f.pool, f.tenant, booking_at(&f, ten + 15 * MINUTE, None))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Conflict(_)));

        create(&f.pool, f.tenant, booking_at(&f, ten + 30 * MINUTE, None))
            .await
            .unwrap();

        let canceled = cancel(&f.pool, f.tenant, first.id, Some("no show".into()))
            .await
            .unwrap();
        assert_eq!(canceled.metadata["cancel_reason"], "no show");

        create(&f.pool, f.tenant, booking_at(&f, ten, None))
            .await
            .unwrap();
    }
}
