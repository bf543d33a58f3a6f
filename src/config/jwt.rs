use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
    pub invite_token_expiry: i64,
}

impl JwtConfig {
    /// Load the signing configuration from the environment.
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set. Every token issued or verified in
    /// the process depends on this secret, so startup must fail here rather
    /// than each request failing later.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
            invite_token_expiry: env::var("JWT_INVITE_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
        }
    }
}
