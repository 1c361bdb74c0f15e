//! Auth API Handlers

use axum::{
    Json,
    extract::{Extension, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{company, user};
use crate::utils::{AppError, AppResult};
use shared::models::{Company, CompanyRegister, LoginRequest, User};

/// Token + user payload returned by register and login
#[derive(serde::Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

fn hash_password(password: &str) -> AppResult<String> {
    use argon2::password_hash::{SaltString, rand_core::OsRng};
    use argon2::{Argon2, PasswordHasher};

    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {e}")))
}

/// POST /api/auth/register — create a company plus its first admin user
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<CompanyRegister>,
) -> AppResult<Json<AuthResponse>> {
    if payload.password.len() < 8 {
        return Err(AppError::validation(
            "Password must be at least 8 characters",
        ));
    }
    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return Err(AppError::validation("A valid email is required"));
    }

    let password_hash = hash_password(&payload.password)?;
    let (_, user) = company::register(&state.pool, &payload, &password_hash).await?;

    let token = state
        .jwt
        .create_token(&user)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(AuthResponse { token, user }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = user::authenticate(&state.pool, &payload.email, &payload.password)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    user::touch_last_login(&state.pool, user.id).await?;

    let token = state
        .jwt
        .create_token(&user)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(AuthResponse { token, user }))
}

/// Current user + company payload
#[derive(serde::Serialize)]
pub struct MeResponse {
    pub user: User,
    pub company: Company,
}

/// GET /api/auth/me — the authenticated user and their company
pub async fn me(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<MeResponse>> {
    let user = user::find_by_id(&state.pool, current_user.id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    let company = company::find_by_id(&state.pool, current_user.tenant_id)
        .await?
        .ok_or_else(|| AppError::not_found("Company not found"))?;

    Ok(Json(MeResponse { user, company }))
}
