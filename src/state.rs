use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::config::notifications::NotificationsConfig;
use crate::modules::notifications::broadcaster::Broadcaster;

/// Shared application state.
///
/// The broadcaster lives here for the whole server lifetime and is the
/// only route to the connection registry; handlers receive it through
/// state instead of any ambient global.
#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub notifications_config: NotificationsConfig,
    pub broadcaster: Broadcaster,
}

pub fn init_app_state() -> AppState {
    AppState {
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        notifications_config: NotificationsConfig::from_env(),
        broadcaster: Broadcaster::new(),
    }
}
