use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub mod jwt;
pub mod middleware;

pub use jwt::JwtService;
pub use middleware::{AuthenticatedUser, auth_middleware};

/// User claims for JWT tokens
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub sub: Uuid,        // Subject (user ID)
    pub username: String, // Username
    pub exp: i64,         // Expiration time
    pub iat: i64,         // Issued at
    pub iss: String,      // Issuer
}

impl Claims {
    pub fn new(user_id: Uuid, username: String, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + chrono::Duration::hours(expiration_hours);

        Self {
            sub: user_id,
            username,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: ISSUER.to_string(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Issuer stamped into every token and required back on verification.
pub const ISSUER: &str = "bookshelf-api";
