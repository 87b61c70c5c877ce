use std::convert::Infallible;
use std::time::Duration;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::{Stream, StreamExt};
use tracing::{info, instrument};
use validator::Validate;

use crate::middleware::auth::AuthUser;
use crate::modules::notifications::model::{EventPayload, PublishNotificationDto, PublishResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Open a notification stream for the authenticated user.
///
/// Events are framed as `data: <json>` records. Idle connections get a
/// comment-only keep-alive record on a fixed interval so intermediaries
/// don't time the stream out; conforming SSE parsers ignore comments,
/// so keep-alives never reach event-handling logic.
#[utoipa::path(
    get,
    path = "/api/notifications/stream",
    responses(
        (status = 200, description = "SSE stream of notification events", content_type = "text/event-stream"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Notifications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn stream_notifications(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let subscription = state.broadcaster.register();

    info!(
        connection_id = %subscription.id(),
        role = %auth_user.role(),
        "Notification stream opened"
    );

    // The subscription rides inside the stream: when the client
    // disconnects axum drops the stream, which drops the subscription
    // and deregisters the connection.
    let stream = subscription.map(|message| Ok(Event::default().data(message)));

    Sse::new(stream).keep_alive(
        KeepAlive::new().interval(Duration::from_secs(state.notifications_config.keep_alive_secs)),
    )
}

/// Publish a notification to every connected client.
#[utoipa::path(
    post,
    path = "/api/notifications",
    request_body = PublishNotificationDto,
    responses(
        (status = 202, description = "Event accepted for delivery", body = PublishResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - tutors and admins only")
    ),
    tag = "Notifications",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn publish_notification(
    State(state): State<AppState>,
    Json(dto): Json<PublishNotificationDto>,
) -> Result<(StatusCode, Json<PublishResponse>), AppError> {
    dto.validate()
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    let recipients = state.broadcaster.connection_count();
    let payload = EventPayload::from(dto);
    let delivered = state.broadcaster.publish(&payload)?;

    info!(
        kind = ?payload.kind,
        entity_id = %payload.entity_id,
        delivered,
        "Notification published"
    );

    Ok((StatusCode::ACCEPTED, Json(PublishResponse { recipients })))
}
