//! Authentication module
//!
//! JWT issuing/validation plus the middleware that binds every request
//! to an authenticated tenant.

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};

/// Authenticated identity extracted from the JWT. The `tenant_id` here is
/// the scoping value for every tenant-bound data access in the request.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub tenant_id: i64,
    pub name: String,
    pub role: String,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == shared::models::user_role::ADMIN
    }
}

impl TryFrom<Claims> for CurrentUser {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| JwtError::InvalidToken("Malformed subject claim".into()))?;
        Ok(Self {
            id,
            tenant_id: claims.tenant_id,
            name: claims.name,
            role: claims.role,
        })
    }
}
