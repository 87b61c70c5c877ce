use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::role::{require_member, require_staff};
use crate::state::AppState;

use super::controller::{publish_notification, stream_notifications};

pub fn init_notifications_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/stream",
            get(stream_notifications).route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_member,
            )),
        )
        .route(
            "/",
            post(publish_notification)
                .route_layer(middleware::from_fn_with_state(state, require_staff)),
        )
}
