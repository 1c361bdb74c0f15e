//! JWT token service
//!
//! Issues and validates the HS256 tokens that carry the user's identity,
//! tenant and role.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use shared::models::User;
use thiserror::Error;

/// Claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject)
    pub sub: String,
    /// Tenant (company) the user belongs to
    pub tenant_id: i64,
    /// Display name
    pub name: String,
    /// Role name (admin | manager | staff)
    pub role: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: i64,
    /// Issued at (Unix timestamp seconds)
    pub iat: i64,
}

/// JWT errors
#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// JWT service — wraps the signing secret and expiry policy
#[derive(Clone)]
pub struct JwtService {
    secret: String,
    expiry_hours: i64,
}

impl JwtService {
    pub fn new(secret: impl Into<String>, expiry_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiry_hours,
        }
    }

    /// Create a token for an authenticated user
    pub fn create_token(&self, user: &User) -> Result<String, JwtError> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            tenant_id: user.tenant_id,
            name: user.name.clone(),
            role: user.role.clone(),
            exp: (now + chrono::Duration::hours(self.expiry_hours)).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate a token and return its claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::default();
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
            _ => JwtError::InvalidToken(e.to_string()),
        })
    }

    /// Extract the bearer token from an `Authorization` header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::user_role;

    fn sample_user() -> User {
        User {
            id: 42,
            tenant_id: 7,
            name: "Ana".into(),
            email: "ana@example.com".into(),
            phone: None,
            role: user_role::ADMIN.into(),
            password_hash: "hash".into(),
            is_active: true,
            last_login_at: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn token_round_trip_preserves_identity() {
        let service = JwtService::new("test-secret-at-least-32-bytes-long!", 24);
        let token = service.create_token(&sample_user()).unwrap();
        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.tenant_id, 7);
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn foreign_and_garbage_tokens_are_rejected() {
        let service = JwtService::new("test-secret-at-least-32-bytes-long!", 24);
        let other = JwtService::new("another-secret-entirely-different!!", 24);

        let token = other.create_token(&sample_user()).unwrap();
        assert!(matches!(
            service.validate_token(&token),
            Err(JwtError::InvalidToken(_))
        ));
        assert!(matches!(
            service.validate_token("not-a-token"),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn bearer_prefix_extraction() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }
}
