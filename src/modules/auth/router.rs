use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::me;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}
