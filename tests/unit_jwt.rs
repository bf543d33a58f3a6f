use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use classquest::config::jwt::JwtConfig;
use classquest::utils::errors::AppError;
use classquest::utils::jwt::{
    create_access_token, create_invite_token, verify_invite_token, verify_token,
};
use uuid::Uuid;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 3600,
        invite_token_expiry: 604800,
    }
}

#[test]
fn test_create_access_token_success() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let result = create_access_token(user_id, &jwt_config);

    assert!(result.is_ok());
    let token = result.unwrap();
    assert!(!token.is_empty());
}

#[test]
fn test_verify_token_round_trip() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
}

#[test]
fn test_invite_token_round_trip() {
    let jwt_config = get_test_jwt_config();

    let token = create_invite_token("Math 101", &jwt_config).unwrap();
    let claims = verify_invite_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.class_code, "Math 101");
}

#[test]
fn test_verify_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, &jwt_config).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 3600,
        invite_token_expiry: 604800,
    };

    let result = verify_token(&token, &wrong_jwt_config);

    assert!(matches!(result, Err(AppError::InvalidToken(_))));
}

#[test]
fn test_verify_invite_token_wrong_secret() {
    let jwt_config = get_test_jwt_config();
    let token = create_invite_token("Math 101", &jwt_config).unwrap();

    let wrong_jwt_config = JwtConfig {
        secret: "different_secret_key".to_string(),
        access_token_expiry: 3600,
        invite_token_expiry: 604800,
    };

    let result = verify_invite_token(&token, &wrong_jwt_config);

    assert!(matches!(result, Err(AppError::InvalidToken(_))));
}

#[test]
fn test_verify_token_invalid() {
    let jwt_config = get_test_jwt_config();

    let result = verify_token("invalid.token.here", &jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_token_empty() {
    let jwt_config = get_test_jwt_config();

    let result = verify_token("", &jwt_config);

    assert!(result.is_err());
}

#[test]
fn test_verify_token_malformed() {
    let jwt_config = get_test_jwt_config();
    let malformed_tokens = vec![
        "not.enough.parts",
        "too.many.parts.here.extra",
        "!!!.invalid.chars",
        "header.payload.",
        ".payload.signature",
    ];

    for token in malformed_tokens {
        let result = verify_token(token, &jwt_config);
        assert!(result.is_err(), "expected error for {:?}", token);
    }
}

#[test]
fn test_verify_rejects_unsigned_alg_none_token() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    // Forge the classic downgrade token: header declares "none" and the
    // signature segment is empty. Verification pins HS256 and must refuse it.
    let valid = create_access_token(user_id, &jwt_config).unwrap();
    let payload = valid.split('.').nth(1).unwrap();
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let forged = format!("{}.{}.", header, payload);

    let result = verify_token(&forged, &jwt_config);

    assert!(matches!(result, Err(AppError::InvalidToken(_))));
}

#[test]
fn test_verify_rejects_other_hmac_algorithms() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    // Same secret, but signed as HS384: the pinned algorithm list rejects it.
    let claims = serde_json::json!({
        "sub": user_id.to_string(),
        "iat": 1_700_000_000usize,
        "exp": 9_999_999_999usize,
    });
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS384),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .unwrap();

    let result = verify_token(&token, &jwt_config);

    assert!(matches!(result, Err(AppError::InvalidToken(_))));
}

#[test]
fn test_session_token_is_not_an_invite_token() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, &jwt_config).unwrap();

    // An invite token requires a class_code claim.
    assert!(verify_invite_token(&token, &jwt_config).is_err());
}

#[test]
fn test_token_expiry_is_set() {
    let jwt_config = get_test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(
        claims.exp - claims.iat,
        jwt_config.access_token_expiry as usize
    );
}

#[test]
fn test_invite_token_expiry_is_set() {
    let jwt_config = get_test_jwt_config();

    let token = create_invite_token("Math 101", &jwt_config).unwrap();
    let claims = verify_invite_token(&token, &jwt_config).unwrap();

    assert!(claims.exp > claims.iat);
    assert_eq!(
        claims.exp - claims.iat,
        jwt_config.invite_token_expiry as usize
    );
}

#[test]
fn test_create_token_different_users_different_tokens() {
    let jwt_config = get_test_jwt_config();
    let user_id1 = Uuid::new_v4();
    let user_id2 = Uuid::new_v4();

    let token1 = create_access_token(user_id1, &jwt_config).unwrap();
    let token2 = create_access_token(user_id2, &jwt_config).unwrap();

    assert_ne!(token1, token2);

    let claims1 = verify_token(&token1, &jwt_config).unwrap();
    let claims2 = verify_token(&token2, &jwt_config).unwrap();

    assert_eq!(claims1.sub, user_id1.to_string());
    assert_eq!(claims2.sub, user_id2.to_string());
}
