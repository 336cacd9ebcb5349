//! Token issuing and verification around the `jsonwebtoken` collaborator.

use std::sync::Arc;

use anyhow::Result;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::auth::{Claims, ISSUER};
use crate::error::ApiError;

/// HS256 token service shared through `AppState`.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiration_hours: i64) -> Result<Self> {
        if secret.len() < 16 {
            anyhow::bail!("JWT_SECRET must be at least 16 bytes");
        }

        Ok(Self {
            encoding_key: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding_key: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            expiration_hours,
        })
    }

    /// Issue a token for the given user.
    pub fn issue_token(&self, user_id: Uuid, username: &str) -> Result<String> {
        let claims = Claims::new(user_id, username.to_string(), self.expiration_hours);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verify a token and return its claims. Failures carry the verifier's
    /// own message so the 401 body matches what went wrong.
    pub fn decode_token(&self, token: &str) -> std::result::Result<Claims, ApiError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|err| ApiError::invalid_token(err.to_string()))
    }
}
