use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::middleware::auth::CurrentUser;

#[derive(Serialize, ToSchema)]
pub struct DemoResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Protected demo endpoint
#[utoipa::path(
    get,
    path = "/demo",
    responses(
        (status = 200, description = "Greeting for the authenticated user", body = DemoResponse),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("bearer_auth" = [])),
    tag = "Demo"
)]
pub async fn demo(CurrentUser(context): CurrentUser) -> Json<DemoResponse> {
    Json(DemoResponse {
        message: format!(
            "Hello {}! If you can read this, authentication works.",
            context.user.username
        ),
    })
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "Demo"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
