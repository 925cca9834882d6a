use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::auth::{login, logout, register, show_current_user};

pub fn routes() -> Router<AppRegistry> {
    let auth_routers = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", delete(logout))
        .route("/me", get(show_current_user));

    Router::new().nest("/auth", auth_routers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use adapter::{database::connect_database_with, redis::RedisClient};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use shared::config::{AppConfig, AuthConfig, DatabaseConfig, RedisConfig};
    use tower::ServiceExt;

    // Lazy pool and client: nothing connects until a repository is hit,
    // so a request rejected at extraction never needs a live backend.
    fn test_registry() -> AppRegistry {
        let app_config = AppConfig {
            database: DatabaseConfig {
                host: "localhost".into(),
                port: 5432,
                username: "app".into(),
                password: "passwd".into(),
                database: "app".into(),
            },
            redis: RedisConfig {
                host: "localhost".into(),
                port: 6379,
            },
            auth: AuthConfig { ttl: 60 },
        };
        let pool = connect_database_with(&app_config.database);
        let kv = Arc::new(RedisClient::new(&app_config.redis).unwrap());
        AppRegistry::new(pool, kv, app_config)
    }

    #[tokio::test]
    async fn malformed_body_gets_the_json_error_envelope() {
        let app = routes().with_state(test_registry());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "invalid_argument");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn missing_body_gets_the_json_error_envelope() {
        let app = routes().with_state(test_registry());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "invalid_argument");
    }
}
