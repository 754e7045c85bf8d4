use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims encoded within a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject: the authenticated user's id.
    pub sub: Uuid,
    /// Expiration timestamp, seconds since epoch.
    pub exp: usize,
}

/// Issues a signed session token for `user_id`, expiring `ttl_hours` from
/// now. The secret is the server-held signing key from `AuthSettings`.
pub fn generate_token(user_id: Uuid, secret: &str, ttl_hours: i64) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(ttl_hours))
        .ok_or_else(|| AppError::Internal("Token expiry out of range".into()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
}

/// Verifies a token's signature and expiry and decodes its claims.
///
/// Malformed input, a signature made with a different secret, and an expired
/// `exp` all come back as `AppError::Authentication`.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Authentication(format!("Invalid token: {}", e)))
}
