//! Role-based authorization middleware.
//!
//! Every protected route declares a literal allow-list of roles. There
//! is no role hierarchy and no wildcard: an admin is rejected by a
//! tutor-only gate unless the gate lists `admin` itself.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};

use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware that admits the request only if the authenticated user's
/// role is in `allowed_roles`.
///
/// Runs the authenticator first: a request without a verifiable
/// credential is rejected with 401 before any role check happens.
///
/// # Usage with axum::middleware::from_fn_with_state
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/reports", get(reports_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<Role>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    check_any_role(&auth_user, &allowed_roles)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Admin-only routes.
pub async fn require_admin(
    state: State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(state, req, next, vec![Role::Admin]).await
}

/// Staff routes: tutors and admins, each listed explicitly.
pub async fn require_staff(
    state: State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(state, req, next, vec![Role::Tutor, Role::Admin]).await
}

/// Any signed-in portal member.
pub async fn require_member(
    state: State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_roles(state, req, next, vec![Role::Student, Role::Tutor, Role::Admin]).await
}

/// Check a role allow-list inside a handler.
///
/// ```rust,ignore
/// check_any_role(&auth_user, &[Role::Tutor, Role::Admin])?;
/// ```
pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[Role]) -> Result<(), AppError> {
    if !allowed_roles.contains(&auth_user.role()) {
        return Err(AppError::forbidden(format!(
            "Access denied. Required roles: {:?}, but user has role: {:?}",
            allowed_roles,
            auth_user.role()
        )));
    }

    Ok(())
}
