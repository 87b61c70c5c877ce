use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{Claims, Role};
use crate::utils::errors::AppError;

fn signing_secret(jwt_config: &JwtConfig) -> Result<&[u8], AppError> {
    jwt_config
        .secret
        .as_deref()
        .map(str::as_bytes)
        .ok_or_else(|| AppError::configuration("JWT_SECRET is not set"))
}

pub fn create_access_token(
    user_id: Uuid,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let secret = signing_secret(jwt_config)?;
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        iat: now,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verify a token's signature and expiry and return its claims.
///
/// A missing signing secret is reported as a configuration fault (500)
/// rather than folded into the 401, so a misconfigured deployment
/// rejects everything instead of quietly accepting forged tokens.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let secret = signing_secret(jwt_config)?;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
