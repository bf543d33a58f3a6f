use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Session token carried as a query parameter on read endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TokenQuery {
    pub token: Option<String>,
}

/// Gate for token-authenticated operations.
///
/// The API carries the session token inside request parameters rather than a
/// header, so every handler passes its `token` field through here before
/// touching the store. A missing token and an unverifiable token are distinct
/// failures ("No token" vs "Invalid token").
pub fn authorize_token(token: Option<&str>, jwt_config: &JwtConfig) -> Result<Uuid, AppError> {
    let token = token.ok_or_else(|| AppError::missing_credential("No token"))?;
    let claims = verify_token(token, jwt_config)?;
    Uuid::parse_str(&claims.sub).map_err(|_| AppError::invalid_token("Invalid token"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::create_access_token;

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            access_token_expiry: 3600,
            invite_token_expiry: 604800,
        }
    }

    #[test]
    fn test_authorize_token_missing() {
        let result = authorize_token(None, &test_jwt_config());
        assert!(matches!(result, Err(AppError::MissingCredential(_))));
    }

    #[test]
    fn test_authorize_token_invalid() {
        let result = authorize_token(Some("not.a.token"), &test_jwt_config());
        assert!(matches!(result, Err(AppError::InvalidToken(_))));
    }

    #[test]
    fn test_authorize_token_valid() {
        let jwt_config = test_jwt_config();
        let user_id = Uuid::new_v4();
        let token = create_access_token(user_id, &jwt_config).unwrap();

        let subject = authorize_token(Some(&token), &jwt_config).unwrap();
        assert_eq!(subject, user_id);
    }
}
