use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    /// Base URL the inference pipelines are pointed at.
    inference_api: String,
    version: String,
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        inference_api: state.hf_api_base.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
