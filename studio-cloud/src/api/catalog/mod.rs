//! Catalog API module (services + products)
//!
//! Professionals live here too: together these are the referenced
//! entities every booking must validate against its tenant.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/services", service_routes())
        .nest("/api/products", product_routes())
        .nest("/api/professionals", professional_routes())
}

fn service_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_services).post(handler::create_service))
        .route(
            "/{id}",
            get(handler::get_service)
                .put(handler::update_service)
                .delete(handler::delete_service),
        )
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_products).post(handler::create_product))
        .route(
            "/{id}",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
}

fn professional_routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list_professionals).post(handler::create_professional),
        )
        .route(
            "/{id}",
            get(handler::get_professional)
                .put(handler::update_professional)
                .delete(handler::delete_professional),
        )
}
