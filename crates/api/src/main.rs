use chrono::Duration;

use authserver_api::app::{self, AppConfig, BootstrapAdmin};
use authserver_auth::token::DEFAULT_TTL_SECS;

#[tokio::main]
async fn main() {
    authserver_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    let ttl_secs = std::env::var("TOKEN_TTL_SECS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_TTL_SECS);

    let config = AppConfig {
        jwt_secret,
        token_ttl: Duration::seconds(ttl_secs),
        bootstrap_admin: Some(BootstrapAdmin {
            email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@authserver.local".to_string()),
            password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string()),
            name: "System Admin".to_string(),
        }),
    };

    let app = app::build_app(config);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
