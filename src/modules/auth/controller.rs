use axum::Json;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

/// Return the decoded claim set for the presented credential.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Decoded token claims", body = Claims),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Authentication",
    security(("bearer_auth" = []))
)]
pub async fn me(auth_user: AuthUser) -> Result<Json<Claims>, AppError> {
    Ok(Json(auth_user.0))
}
