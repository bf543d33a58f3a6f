use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha256;

use crate::utils::errors::AppError;

pub const SALT_LEN: usize = 32;
pub const DERIVED_KEY_LEN: usize = 32;
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Generate a fresh 32-byte salt from the OS CSPRNG.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

/// Derive a password verifier via PBKDF2-HMAC-SHA256 and return it as
/// lowercase hex.
pub fn hash_password(password: &str, salt: &[u8]) -> String {
    let mut key = [0u8; DERIVED_KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    hex::encode(key)
}

/// Format a salt and derived key for storage: `"<hex(salt)>$<hex(hash)>"`.
pub fn encode_password(salt: &[u8], hash: &str) -> String {
    format!("{}${}", hex::encode(salt), hash)
}

/// Salt, hash and encode a new password in one step.
pub fn hash_new_password(password: &str) -> String {
    let salt = generate_salt();
    let hash = hash_password(password, &salt);
    encode_password(&salt, &hash)
}

/// Verify a candidate password against a stored `salt$hash` composite.
///
/// A stored value that is not exactly two hex fields is a
/// [`AppError::MalformedCredential`], not a mismatch — callers must be able
/// to report credential corruption separately from a wrong password.
pub fn verify_password(stored: &str, candidate: &str) -> Result<bool, AppError> {
    let mut parts = stored.split('$');
    let (salt_hex, hash_hex) = match (parts.next(), parts.next(), parts.next()) {
        (Some(salt), Some(hash), None) if !salt.is_empty() && !hash.is_empty() => (salt, hash),
        _ => {
            return Err(AppError::malformed_credential(
                "Stored credential is not a salt$hash composite",
            ));
        }
    };

    let salt = hex::decode(salt_hex).map_err(|_| {
        AppError::malformed_credential("Stored credential salt is not valid hex")
    })?;
    if hex::decode(hash_hex).is_err() {
        return Err(AppError::malformed_credential(
            "Stored credential hash is not valid hex",
        ));
    }

    let recomputed = hash_password(candidate, &salt);
    Ok(constant_time_eq(recomputed.as_bytes(), hash_hex.as_bytes()))
}

// Branchless comparison so the mismatch position does not leak through timing.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
