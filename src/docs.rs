use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{Claims, Role};
use crate::modules::notifications::model::{
    EventKind, EventPayload, PublishNotificationDto, PublishResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::me,
        crate::modules::notifications::controller::stream_notifications,
        crate::modules::notifications::controller::publish_notification,
    ),
    components(
        schemas(
            Claims,
            Role,
            EventKind,
            EventPayload,
            PublishNotificationDto,
            PublishResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Credential verification endpoints"),
        (name = "Notifications", description = "SSE notification stream and publishing")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
