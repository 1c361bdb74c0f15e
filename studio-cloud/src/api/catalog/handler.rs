//! Catalog API Handlers (services, products, professionals)

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{product, professional, service};
use crate::utils::{AppError, AppResult};
use shared::models::{
    Product, ProductCreate, ProductUpdate, Professional, ProfessionalCreate, ProfessionalUpdate,
    Service, ServiceCreate, ServiceUpdate,
};

// ========== Services ==========

pub async fn list_services(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Service>>> {
    Ok(Json(
        service::find_all(&state.pool, current_user.tenant_id).await?,
    ))
}

pub async fn get_service(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Service>> {
    let service = service::find_by_id(&state.pool, current_user.tenant_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Service {id} not found")))?;
    Ok(Json(service))
}

pub async fn create_service(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<ServiceCreate>,
) -> AppResult<Json<Service>> {
    Ok(Json(
        service::create(&state.pool, current_user.tenant_id, payload).await?,
    ))
}

pub async fn update_service(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<ServiceUpdate>,
) -> AppResult<Json<Service>> {
    Ok(Json(
        service::update(&state.pool, current_user.tenant_id, id, payload).await?,
    ))
}

pub async fn delete_service(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    Ok(Json(
        service::delete(&state.pool, current_user.tenant_id, id).await?,
    ))
}

// ========== Products ==========

pub async fn list_products(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(
        product::find_all(&state.pool, current_user.tenant_id).await?,
    ))
}

pub async fn get_product(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let product = product::find_by_id(&state.pool, current_user.tenant_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    Ok(Json(
        product::create(&state.pool, current_user.tenant_id, payload).await?,
    ))
}

pub async fn update_product(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    Ok(Json(
        product::update(&state.pool, current_user.tenant_id, id, payload).await?,
    ))
}

pub async fn delete_product(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    Ok(Json(
        product::delete(&state.pool, current_user.tenant_id, id).await?,
    ))
}

// ========== Professionals ==========

pub async fn list_professionals(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<Professional>>> {
    Ok(Json(
        professional::find_all(&state.pool, current_user.tenant_id).await?,
    ))
}

pub async fn get_professional(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Professional>> {
    let professional = professional::find_by_id(&state.pool, current_user.tenant_id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Professional {id} not found")))?;
    Ok(Json(professional))
}

pub async fn create_professional(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<ProfessionalCreate>,
) -> AppResult<Json<Professional>> {
    Ok(Json(
        professional::create(&state.pool, current_user.tenant_id, payload).await?,
    ))
}

pub async fn update_professional(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<ProfessionalUpdate>,
) -> AppResult<Json<Professional>> {
    Ok(Json(
        professional::update(&state.pool, current_user.tenant_id, id, payload).await?,
    ))
}

pub async fn delete_professional(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    Ok(Json(
        professional::delete(&state.pool, current_user.tenant_id, id).await?,
    ))
}
