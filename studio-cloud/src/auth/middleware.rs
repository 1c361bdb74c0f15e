//! Authentication middleware
//!
//! Axum middleware for JWT authentication and role checks.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Authentication middleware — requires a logged-in user.
///
/// Extracts and validates the JWT from `Authorization: Bearer <token>`,
/// then injects [`CurrentUser`] into the request extensions. Every
/// tenant-scoped handler reads its tenant id from that extension — the
/// client never supplies a tenant id directly.
///
/// Skipped paths:
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths
/// - `/api/auth/login`, `/api/auth/register`
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes (health, static) skip authentication
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    let is_public_api_route = path == "/api/auth/login" || path == "/api/auth/register";
    if is_public_api_route {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::InvalidToken)?,
        None => return Err(AppError::Unauthorized),
    };

    match state.jwt.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::try_from(claims).map_err(|_| AppError::InvalidToken)?;
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(JwtError::ExpiredToken) => Err(AppError::TokenExpired),
        Err(_) => Err(AppError::InvalidToken),
    }
}

/// Role check middleware — requires the admin role.
///
/// Administrative routes span tenants, so they sit behind a distinct
/// gate instead of the tenant-bound session scoping.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthorized)?;

    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin role required".into()));
    }

    Ok(next.run(req).await)
}
