use std::env;

/// JWT signing configuration.
///
/// There is deliberately no fallback secret: when `JWT_SECRET` is
/// unset, token issuance and verification both refuse rather than
/// signing with a well-known value.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: Option<String>,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
        }
    }
}
