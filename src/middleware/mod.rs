//! Middleware for authentication and authorization.
//!
//! # Authentication flow
//!
//! 1. Client presents a token via `Authorization: Bearer <token>`, the
//!    `admin_token` cookie, or the `auth_token` cookie
//! 2. The [`auth::AuthUser`] extractor tries each source in that order
//!    and attaches the first claim set that verifies
//! 3. A role gate ([`role::require_roles`] or one of its named layers)
//!    checks the claims against the route's allow-list
//! 4. The handler runs only if both checks pass

pub mod auth;
pub mod role;
