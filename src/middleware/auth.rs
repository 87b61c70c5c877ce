use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::modules::auth::model::{Claims, Role};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Cookie carrying an admin-scoped session token.
pub const ADMIN_TOKEN_COOKIE: &str = "admin_token";
/// Cookie carrying a general-purpose session token.
pub const AUTH_TOKEN_COOKIE: &str = "auth_token";

/// Extractor that validates a bearer credential and provides the
/// authenticated user's claims.
///
/// Candidate sources are tried in a fixed precedence order: the
/// `Authorization` header, the admin cookie, then the general session
/// cookie. The first source whose token verifies wins; a source that is
/// present but fails verification falls through to the next one. When
/// no source verifies the request is rejected with 401 and never
/// reaches the handler.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn role(&self) -> Role {
        self.0.role
    }

    /// Get the user ID as UUID.
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized("Invalid user ID in token"))
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let bearer = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        // Precedence: header, admin cookie, general cookie.
        let candidates = [
            bearer,
            jar.get(ADMIN_TOKEN_COOKIE).map(|c| c.value()),
            jar.get(AUTH_TOKEN_COOKIE).map(|c| c.value()),
        ];

        let mut any_present = false;
        for token in candidates.into_iter().flatten() {
            any_present = true;
            match verify_token(token, &state.jwt_config) {
                Ok(claims) => return Ok(AuthUser(claims)),
                // Configuration faults terminate immediately; a bad
                // token just falls through to the next source.
                Err(err) if err.status.is_server_error() => return Err(err),
                Err(_) => continue,
            }
        }

        if any_present {
            Err(AppError::unauthorized("Invalid or expired token"))
        } else {
            Err(AppError::unauthorized("Missing credentials"))
        }
    }
}
