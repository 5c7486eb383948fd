//! NewsPulse: article text extraction plus financial NLP over the result.
//!
//! The crate splits into four layers: [`fetcher`] downloads and decodes
//! pages, [`extractor`] runs the fallback chain that pulls article text out
//! of them, [`analysis`] sends a snippet of that text through hosted
//! inference models, and [`analyze`] exposes the whole flow over HTTP.

pub mod analysis;
pub mod analyze;
pub mod app_state;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::app_state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(analyze::handlers::analyze, health::health_check),
    components(schemas(
        analyze::dtos::AnalyzeRequest,
        analyze::dtos::AnalyzeResponse,
        analyze::dtos::ExtractionInfo,
        analyze::dtos::ErrorResponse,
        analysis::types::Sentiment,
        analysis::types::Entity,
        analysis::types::ImpactDirection,
        analysis::types::ImpactPrediction,
        extractor::Strategy,
        health::HealthResponse,
    )),
    tags(
        (name = "analyze", description = "Article analysis"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Build the application router around `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(analyze::handlers::index))
        .route("/api/analyze", post(analyze::handlers::analyze))
        .route("/healthz", get(health::health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
