use axum::Json;

use crate::models::meta::{HealthResponse, MessageResponse};

#[utoipa::path(
    get,
    path = "/",
    tag = "Meta",
    operation_id = "root",
    summary = "Service banner",
    responses((status = 200, description = "Service is running", body = MessageResponse)),
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Today's Detective Backend is Running"))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Meta",
    operation_id = "health",
    summary = "Liveness probe",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
    })
}
