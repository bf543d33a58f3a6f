use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{Claims, InviteClaims};
use crate::utils::errors::AppError;

/// Issue a session token asserting a user's identity.
pub fn create_access_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Issue an invitation token granting registration into a class.
pub fn create_invite_token(class_code: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.invite_token_expiry as usize;

    let claims = InviteClaims {
        class_code: class_code.to_string(),
        iat: now,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create invite token: {}", e)))
}

/// Verify a session token and return its claims.
///
/// The accepted algorithm list is pinned to HS256, so unsigned ("none")
/// tokens and tokens signed with any other algorithm are rejected regardless
/// of what their header declares.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::invalid_token("Invalid token"))
}

/// Verify an invitation token and return its claims.
pub fn verify_invite_token(token: &str, jwt_config: &JwtConfig) -> Result<InviteClaims, AppError> {
    decode::<InviteClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::invalid_token("Invalid token"))
}
