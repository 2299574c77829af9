use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use serde_json::Value;
use uuid::Uuid;

use tokengate::config::cors::CorsConfig;
use tokengate::config::jwt::JwtConfig;
use tokengate::modules::users::store::InMemoryUserStore;
use tokengate::router::init_router;
use tokengate::state::AppState;
use tokengate::utils::jwt::TokenCodec;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        token_expiry: 3600,
    }
}

#[allow(dead_code)]
pub fn test_state() -> AppState {
    test_state_with_expiry(3600)
}

/// State with a fresh in-memory store and a fixed secret. A negative
/// expiry makes every issued token already expired.
#[allow(dead_code)]
pub fn test_state_with_expiry(token_expiry: i64) -> AppState {
    let jwt_config = JwtConfig {
        token_expiry,
        ..test_jwt_config()
    };

    AppState {
        users: Arc::new(InMemoryUserStore::new()),
        token_codec: TokenCodec::new(&jwt_config),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    }
}

#[allow(dead_code)]
pub fn test_app() -> Router {
    init_router(test_state())
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

#[allow(dead_code)]
pub fn bearer_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[allow(dead_code)]
pub fn generate_unique_username() -> String {
    format!("user-{}", Uuid::new_v4())
}
