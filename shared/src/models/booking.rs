//! Booking Model

use serde::{Deserialize, Serialize};

/// Booking status values.
///
/// Intended flow: `pending → {confirmed, canceled}`,
/// `confirmed → {done, canceled}`. Canceled bookings never count for
/// conflict detection.
pub mod booking_status {
    pub const PENDING: &str = "pending";
    pub const CONFIRMED: &str = "confirmed";
    pub const DONE: &str = "done";
    pub const CANCELED: &str = "canceled";

    pub fn is_valid(status: &str) -> bool {
        matches!(status, PENDING | CONFIRMED | DONE | CANCELED)
    }
}

/// Booking entity — a scheduled appointment linking a client, a
/// professional and a service within a `[start_at, end_at)` interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    pub tenant_id: i64,
    pub client_id: i64,
    pub professional_id: i64,
    pub service_id: i64,
    pub status: String,
    /// Interval start (epoch millis, inclusive)
    pub start_at: i64,
    /// Interval end (epoch millis, exclusive)
    pub end_at: i64,
    pub notes: Option<String>,
    /// Free-form metadata; cancellation stores `cancel_reason` here
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<i64>,
}

/// Create booking payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub client_id: i64,
    pub professional_id: i64,
    pub service_id: i64,
    /// Defaults to `pending` when omitted
    pub status: Option<String>,
    pub start_at: i64,
    /// When omitted (or not after `start_at`) the end is derived from the
    /// service duration
    pub end_at: Option<i64>,
    pub notes: Option<String>,
}

/// Update booking payload — only provided fields are applied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingUpdate {
    pub status: Option<String>,
    pub start_at: Option<i64>,
    pub end_at: Option<i64>,
    pub notes: Option<String>,
}

/// Cancel booking payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingCancel {
    pub reason: Option<String>,
}
