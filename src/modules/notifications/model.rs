use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Closed set of notification event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    CourseCreated,
    CourseUpdated,
    CourseDeleted,
    SessionScheduled,
    SessionCancelled,
    Announcement,
}

/// A single notification pushed to connected clients.
///
/// Serialized once per publish and delivered verbatim to every open
/// connection; never stored after delivery.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventPayload {
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Id of the entity the event concerns.
    pub entity_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// DTO for publishing a notification.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PublishNotificationDto {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub entity_id: Uuid,
    /// Optional human-readable summary shown in client notification UIs.
    #[validate(length(max = 500))]
    pub message: Option<String>,
    pub data: Option<Value>,
}

impl From<PublishNotificationDto> for EventPayload {
    fn from(dto: PublishNotificationDto) -> Self {
        Self {
            kind: dto.kind,
            entity_id: dto.entity_id,
            message: dto.message,
            data: dto.data,
        }
    }
}

/// Response for a publish call.
#[derive(Debug, Serialize, ToSchema)]
pub struct PublishResponse {
    /// Connections registered at publish time. Delivery is best-effort;
    /// individual write failures are not reported back.
    pub recipients: usize,
}
