use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, info};

use crate::{
    analysis::AnalysisError,
    analyze::dtos::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, ExtractionInfo},
    app_state::AppState,
    extractor,
};

/// Inference models are capped at 512 tokens; the original UI sent the
/// leading characters of the article, which works well enough in practice.
pub const SNIPPET_CHARS: usize = 512;

pub async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

#[utoipa::path(
    post,
    path = "/api/analyze",
    tag = "analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Article analyzed", body = AnalyzeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 422, description = "No article content found at the URL", body = ErrorResponse),
        (status = 502, description = "Inference backend failed", body = ErrorResponse)
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Response {
    if let Err(message) = payload.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: message }),
        )
            .into_response();
    }

    let article = match extractor::extract(&payload.url).await {
        Ok(article) => article,
        Err(err) => {
            error!(url = %payload.url, attempts = err.attempts.len(), "extraction failed");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response();
        }
    };

    let snippet: String = article.text.chars().take(SNIPPET_CHARS).collect();

    let sentiment = match state.pipelines.sentiment(&snippet).await {
        Ok(sentiment) => sentiment,
        Err(err) => return bad_gateway(err),
    };
    let entities = match state.pipelines.entities(&snippet).await {
        Ok(entities) => entities,
        Err(err) => return bad_gateway(err),
    };
    let impact = match state.pipelines.market_impact(&snippet).await {
        Ok(impact) => impact,
        Err(err) => return bad_gateway(err),
    };

    info!(
        strategy = %article.strategy,
        chars = article.chars,
        entities = entities.len(),
        "analysis complete"
    );

    (
        StatusCode::OK,
        Json(AnalyzeResponse {
            ticker: payload.ticker,
            window_hours: payload.window_hours,
            threshold_pct: payload.threshold_pct,
            article: ExtractionInfo {
                url: payload.url,
                strategy: article.strategy,
                chars: article.chars,
                snippet,
            },
            sentiment,
            entities,
            impact,
        }),
    )
        .into_response()
}

fn bad_gateway(err: AnalysisError) -> Response {
    error!(%err, "inference pipeline failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}
