//! Administrative API module
//!
//! Back-office routes that span tenants. They bypass the per-tenant
//! scoping by design and therefore sit behind [`require_admin`] — a
//! separate authorization gate from the regular tenant-bound session.

mod bookings;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::auth::middleware::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/bookings", get(bookings::list_all).post(bookings::create))
        .route(
            "/bookings/{id}",
            put(bookings::update).delete(bookings::delete),
        )
        .layer(middleware::from_fn(require_admin))
}
