use classquest::utils::errors::AppError;
use classquest::utils::password::{
    DERIVED_KEY_LEN, SALT_LEN, encode_password, generate_salt, hash_new_password, hash_password,
    verify_password,
};

#[test]
fn test_hash_verify_round_trip() {
    let password = "testpassword123";
    let salt = generate_salt();
    let hash = hash_password(password, &salt);
    let stored = encode_password(&salt, &hash);

    let result = verify_password(&stored, password);

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[test]
fn test_hash_new_password_round_trip() {
    let password = "correctpassword";
    let stored = hash_new_password(password);

    assert!(verify_password(&stored, password).unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let stored = hash_new_password("correctpassword");

    let result = verify_password(&stored, "wrongpassword");

    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[test]
fn test_stored_format_is_salt_dollar_hash() {
    let stored = hash_new_password("anypassword");
    let parts: Vec<&str> = stored.split('$').collect();

    assert_eq!(parts.len(), 2);
    // 32-byte salt and 32-byte derived key, both hex
    assert_eq!(parts[0].len(), SALT_LEN * 2);
    assert_eq!(parts[1].len(), DERIVED_KEY_LEN * 2);
    assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_hexdigit())));
    assert_eq!(stored, stored.to_lowercase());
}

#[test]
fn test_hash_is_deterministic_for_same_salt() {
    let salt = generate_salt();

    assert_eq!(hash_password("password", &salt), hash_password("password", &salt));
    assert_ne!(hash_password("password", &salt), hash_password("passwore", &salt));
}

#[test]
fn test_generate_salt_is_unique() {
    let salt1 = generate_salt();
    let salt2 = generate_salt();

    assert_ne!(salt1, salt2);
}

#[test]
fn test_hash_generates_unique_encodings() {
    let password = "samepassword";
    let stored1 = hash_new_password(password);
    let stored2 = hash_new_password(password);

    assert_ne!(stored1, stored2);
    assert!(verify_password(&stored1, password).unwrap());
    assert!(verify_password(&stored2, password).unwrap());
}

#[test]
fn test_verify_malformed_stored_value_is_distinct_error() {
    let malformed = vec![
        "no-dollar-at-all",
        "too$many$dollars",
        "nothex!!$aabbcc",
        "aabbcc$nothex!!",
        "",
        "$",
    ];

    for stored in malformed {
        let result = verify_password(stored, "anypassword");
        assert!(
            matches!(result, Err(AppError::MalformedCredential(_))),
            "expected MalformedCredential for {:?}",
            stored
        );
    }
}

#[test]
fn test_malformed_is_not_reported_as_mismatch() {
    // A corrupt stored value must never look like a plain wrong password.
    let result = verify_password("corrupt-value", "password");
    assert!(result.is_err());
}

#[test]
fn test_hash_special_characters() {
    let password = "p@ssw0rd!#$%^&*()";
    let stored = hash_new_password(password);

    assert!(verify_password(&stored, password).unwrap());
}

#[test]
fn test_hash_unicode_characters() {
    let password = "пароль密碼🔒";
    let stored = hash_new_password(password);

    assert!(verify_password(&stored, password).unwrap());
}

#[test]
fn test_hash_long_password() {
    let password = "a".repeat(100);
    let stored = hash_new_password(&password);

    assert!(verify_password(&stored, &password).unwrap());
}

#[test]
fn test_verify_case_sensitive() {
    let stored = hash_new_password("Password123");

    assert!(!verify_password(&stored, "password123").unwrap());
    assert!(!verify_password(&stored, "PASSWORD123").unwrap());
}
