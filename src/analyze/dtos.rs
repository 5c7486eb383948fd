use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::analysis::{Entity, ImpactPrediction, Sentiment};
use crate::extractor::Strategy;

pub const MIN_WINDOW_HOURS: u32 = 1;
pub const MAX_WINDOW_HOURS: u32 = 168;
pub const MIN_THRESHOLD_PCT: f64 = 0.1;
pub const MAX_THRESHOLD_PCT: f64 = 10.0;

fn default_ticker() -> String {
    "^GSPC".to_string()
}

const fn default_window_hours() -> u32 {
    24
}

const fn default_threshold_pct() -> f64 {
    0.5
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Address of the news article to analyze.
    pub url: String,
    /// Index or symbol the impact prediction is read against.
    #[serde(default = "default_ticker")]
    pub ticker: String,
    /// Lookback window, in hours.
    #[serde(default = "default_window_hours")]
    pub window_hours: u32,
    /// Price move considered significant, in percent.
    #[serde(default = "default_threshold_pct")]
    pub threshold_pct: f64,
}

impl AnalyzeRequest {
    pub fn validate(&self) -> Result<(), String> {
        let parsed = Url::parse(&self.url).map_err(|_| "Invalid URL".to_string())?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err("URL must use http or https".to_string());
        }
        if self.ticker.trim().is_empty() {
            return Err("Ticker cannot be empty".to_string());
        }
        if !(MIN_WINDOW_HOURS..=MAX_WINDOW_HOURS).contains(&self.window_hours) {
            return Err(format!(
                "window_hours must be between {MIN_WINDOW_HOURS} and {MAX_WINDOW_HOURS}"
            ));
        }
        if !(MIN_THRESHOLD_PCT..=MAX_THRESHOLD_PCT).contains(&self.threshold_pct) {
            return Err(format!(
                "threshold_pct must be between {MIN_THRESHOLD_PCT} and {MAX_THRESHOLD_PCT}"
            ));
        }
        Ok(())
    }
}

/// How the article text was obtained.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractionInfo {
    pub url: String,
    pub strategy: Strategy,
    /// Character count of the full extracted text.
    pub chars: usize,
    /// The leading characters actually sent to the models.
    pub snippet: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub ticker: String,
    pub window_hours: u32,
    pub threshold_pct: f64,
    pub article: ExtractionInfo,
    pub sentiment: Sentiment,
    pub entities: Vec<Entity>,
    pub impact: ImpactPrediction,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
