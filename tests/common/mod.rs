#![allow(dead_code)]

use axum::Router;
use uuid::Uuid;

use tutorhive::config::cors::CorsConfig;
use tutorhive::config::jwt::JwtConfig;
use tutorhive::config::notifications::NotificationsConfig;
use tutorhive::modules::auth::model::Role;
use tutorhive::modules::notifications::broadcaster::Broadcaster;
use tutorhive::router::init_router;
use tutorhive::state::AppState;
use tutorhive::utils::jwt::create_access_token;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: Some(TEST_SECRET.to_string()),
        access_token_expiry: 3600,
    }
}

pub fn test_state() -> AppState {
    AppState {
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        notifications_config: NotificationsConfig { keep_alive_secs: 30 },
        broadcaster: Broadcaster::new(),
    }
}

pub fn test_app(state: AppState) -> Router {
    init_router(state)
}

/// Mint a token for a fresh user with the given role.
pub fn token_for(role: Role, jwt_config: &JwtConfig) -> String {
    create_access_token(Uuid::new_v4(), role, jwt_config).unwrap()
}

/// Mint a token for a specific user id, so tests can assert which
/// credential source an identity was taken from.
pub fn token_for_user(user_id: Uuid, role: Role, jwt_config: &JwtConfig) -> String {
    create_access_token(user_id, role, jwt_config).unwrap()
}
