//! # Tutorhive API
//!
//! Backend for a tutoring portal: JWT-based authentication with
//! cookie/header credential sources, role-gated routes, and real-time
//! notification delivery over server-sent events.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Environment-driven configuration (JWT, CORS, SSE)
//! ├── middleware/       # AuthUser extractor and role gates
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Claims, roles, credential introspection
//! │   └── notifications/ # Connection registry, SSE stream, publishing
//! └── utils/           # Shared utilities (errors, JWT)
//! ```
//!
//! Each feature module follows a consistent structure: `model.rs` for
//! data types and DTOs, `controller.rs` for HTTP handlers, `router.rs`
//! for the axum router wiring.
//!
//! ## Authentication
//!
//! Credentials are HS256 JWTs carrying `{sub, role, iat, exp}`. A
//! request may present the token through the `Authorization: Bearer`
//! header, the `admin_token` cookie, or the `auth_token` cookie; the
//! sources are tried in that order and the first one that verifies
//! wins. Roles form a closed set (student, tutor, admin) with no
//! hierarchy between them: every protected route lists exactly the
//! roles it admits.
//!
//! ## Notifications
//!
//! Handlers that change shared state publish an [`modules::notifications::EventPayload`]
//! through the [`modules::notifications::Broadcaster`] held in
//! [`state::AppState`]. Every open SSE connection receives the
//! serialized event; delivery is best-effort with no queueing or
//! replay, and idle connections are kept open with periodic comment
//! records.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key   # required; requests fail closed without it
//! JWT_ACCESS_EXPIRY=3600
//! ALLOWED_ORIGINS=http://localhost:5173
//! NOTIFY_KEEPALIVE_SECS=30
//! PORT=3000
//! ```

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
