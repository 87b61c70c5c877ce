mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use tutorhive::config::jwt::JwtConfig;
use tutorhive::modules::auth::model::Role;

use common::{test_app, test_state, token_for, token_for_user};

async fn me_subject(app: axum::Router, request: Request<Body>) -> String {
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let claims: serde_json::Value = serde_json::from_slice(&body).unwrap();
    claims["sub"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_request_without_credentials_is_unauthorized() {
    let app = test_app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_bearer_header_authenticates() {
    let state = test_state();
    let user_id = Uuid::new_v4();
    let token = token_for_user(user_id, Role::Student, &state.jwt_config);

    let request = Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    assert_eq!(me_subject(test_app(state), request).await, user_id.to_string());
}

#[tokio::test]
async fn test_header_wins_over_both_cookies() {
    let state = test_state();
    let header_user = Uuid::new_v4();
    let admin_cookie_user = Uuid::new_v4();
    let session_cookie_user = Uuid::new_v4();

    let header_token = token_for_user(header_user, Role::Student, &state.jwt_config);
    let admin_token = token_for_user(admin_cookie_user, Role::Admin, &state.jwt_config);
    let session_token = token_for_user(session_cookie_user, Role::Tutor, &state.jwt_config);

    let request = Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, format!("Bearer {header_token}"))
        .header(
            header::COOKIE,
            format!("admin_token={admin_token}; auth_token={session_token}"),
        )
        .body(Body::empty())
        .unwrap();

    assert_eq!(
        me_subject(test_app(state), request).await,
        header_user.to_string()
    );
}

#[tokio::test]
async fn test_admin_cookie_wins_over_session_cookie() {
    let state = test_state();
    let admin_cookie_user = Uuid::new_v4();
    let session_cookie_user = Uuid::new_v4();

    let admin_token = token_for_user(admin_cookie_user, Role::Admin, &state.jwt_config);
    let session_token = token_for_user(session_cookie_user, Role::Student, &state.jwt_config);

    let request = Request::builder()
        .uri("/api/auth/me")
        .header(
            header::COOKIE,
            format!("auth_token={session_token}; admin_token={admin_token}"),
        )
        .body(Body::empty())
        .unwrap();

    assert_eq!(
        me_subject(test_app(state), request).await,
        admin_cookie_user.to_string()
    );
}

#[tokio::test]
async fn test_invalid_header_falls_through_to_valid_cookie() {
    let state = test_state();
    let cookie_user = Uuid::new_v4();
    let cookie_token = token_for_user(cookie_user, Role::Tutor, &state.jwt_config);

    let request = Request::builder()
        .uri("/api/auth/me")
        .header(header::AUTHORIZATION, "Bearer not.a.token")
        .header(header::COOKIE, format!("auth_token={cookie_token}"))
        .body(Body::empty())
        .unwrap();

    assert_eq!(
        me_subject(test_app(state), request).await,
        cookie_user.to_string()
    );
}

#[tokio::test]
async fn test_all_sources_invalid_is_unauthorized() {
    let app = test_app(test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::AUTHORIZATION, "Bearer garbage")
                .header(header::COOKIE, "admin_token=garbage; auth_token=garbage")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_secret_fails_closed() {
    // A token signed with a known secret against a server with no
    // configured secret must be refused, not accepted.
    let signing_config = JwtConfig {
        secret: Some("attacker-known-secret".to_string()),
        access_token_expiry: 3600,
    };
    let token = token_for(Role::Admin, &signing_config);

    let mut state = test_state();
    state.jwt_config = JwtConfig {
        secret: None,
        access_token_expiry: 3600,
    };

    let response = test_app(state)
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_student_is_forbidden_from_publishing() {
    let state = test_state();
    let token = token_for(Role::Student, &state.jwt_config);

    let response = test_app(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/notifications")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({
                        "type": "announcement",
                        "entity_id": Uuid::new_v4(),
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_tutor_may_publish() {
    let state = test_state();
    let token = token_for(Role::Tutor, &state.jwt_config);

    let response = test_app(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/notifications")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({
                        "type": "session_scheduled",
                        "entity_id": Uuid::new_v4(),
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_publish_requires_authentication() {
    let response = test_app(test_state())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/notifications")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_is_public() {
    let response = test_app(test_state())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
