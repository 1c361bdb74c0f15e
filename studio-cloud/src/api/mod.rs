//! API routes for studio-cloud

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod catalog;
pub mod clients;
pub mod health;
pub mod inventory;
pub mod sales;

use axum::{Router, middleware, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::middleware::require_auth;
use crate::core::ServerState;

/// Create the combined router.
///
/// `require_auth` wraps everything; it skips `/health` and the public
/// auth routes internally, and the admin router adds its own role gate
/// on top.
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(auth::router())
        .merge(bookings::router())
        .merge(clients::router())
        .merge(catalog::router())
        .merge(sales::router())
        .merge(inventory::router())
        .merge(admin::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
