use dotenvy::dotenv;

use tutorhive::logging::init_tracing;
use tutorhive::router::init_router;
use tutorhive::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = init_app_state();
    if state.jwt_config.secret.is_none() {
        // The server still starts, but every authenticated route will
        // refuse until JWT_SECRET is configured.
        tracing::error!("JWT_SECRET is not set; all authenticated requests will be rejected");
    }

    let app = init_router(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind listener");
    println!("🚀 Server running on http://localhost:{port}");
    println!("📚 Swagger UI available at http://localhost:{port}/swagger-ui");
    axum::serve(listener, app).await.expect("Server error");
}
