//! Sales API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sales", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/orders", get(handler::list).post(handler::create))
        .route("/orders/{id}", get(handler::get_by_id).put(handler::update))
        .route("/orders/{id}/payments", post(handler::add_payment))
        .route("/payments", get(handler::list_payments))
}
