//! Best-effort article text extraction.
//!
//! Given a URL, three strategies are tried in order and the first one that
//! produces acceptable content wins:
//!
//! 1. readability-style boilerplate removal ([`readable`])
//! 2. generic paragraph scraping ([`paragraphs`])
//! 3. content-zone extraction gated to English ([`zones`])
//!
//! Each strategy fetches the page itself and returns a typed result, so a
//! failure is recorded and the chain moves on instead of being discarded.
//! The only error observable by callers is [`NoContentFound`].

pub mod paragraphs;
pub mod readable;
pub mod zones;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use utoipa::ToSchema;

use crate::fetcher::FetchError;

/// Minimum character count for strategies 1 and 3 (strict `>`). Shorter
/// output usually means a paywall stub or navigation fragment.
pub const MIN_ARTICLE_CHARS: usize = 200;

/// Minimum character count for a single paragraph in strategy 2 (strict `>`),
/// filtering out captions, bylines and ad labels.
pub const MIN_PARAGRAPH_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Readability,
    Paragraphs,
    ContentZones,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Readability => write!(f, "readability"),
            Strategy::Paragraphs => write!(f, "paragraphs"),
            Strategy::ContentZones => write!(f, "content_zones"),
        }
    }
}

/// Why a single strategy produced no usable text.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("network: {0}")]
    Network(String),

    #[error("http status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("parse: {0}")]
    Parse(String),

    #[error("content too short: {got} chars (needs more than {min})")]
    TooShort { got: usize, min: usize },

    #[error("no paragraph longer than {min} chars")]
    NoParagraphs { min: usize },

    #[error("content not in english (detected: {0})")]
    WrongLanguage(String),
}

impl From<FetchError> for StrategyError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Http(status) => Self::HttpStatus(status),
            FetchError::Charset(msg) => Self::Parse(msg),
            other => Self::Network(other.to_string()),
        }
    }
}

/// One failed strategy run, kept for inspection by the caller.
#[derive(Debug)]
pub struct Attempt {
    pub strategy: Strategy,
    pub error: StrategyError,
}

/// Every strategy ran and none produced acceptable text.
#[derive(Debug, Error)]
#[error("no content found at {url}")]
pub struct NoContentFound {
    pub url: String,
    pub attempts: Vec<Attempt>,
}

/// Successful extraction: the winning text, verbatim as the strategy produced
/// it, plus which strategy won.
#[derive(Debug, Clone)]
pub struct ExtractedArticle {
    pub text: String,
    pub strategy: Strategy,
    pub chars: usize,
}

/// Run the fallback chain against `url`.
///
/// Stateless and retry-free: the same URL can be extracted concurrently from
/// multiple tasks, and each call issues at most three GET requests.
#[instrument(skip_all, fields(url = %url))]
pub async fn extract(url: &str) -> Result<ExtractedArticle, NoContentFound> {
    let mut attempts = Vec::new();

    for strategy in [
        Strategy::Readability,
        Strategy::Paragraphs,
        Strategy::ContentZones,
    ] {
        let outcome = match strategy {
            Strategy::Readability => readable::attempt(url).await,
            Strategy::Paragraphs => paragraphs::attempt(url).await,
            Strategy::ContentZones => zones::attempt(url).await,
        };

        match outcome {
            Ok(text) => {
                let chars = text.chars().count();
                debug!(%strategy, chars, "extraction succeeded");
                return Ok(ExtractedArticle {
                    text,
                    strategy,
                    chars,
                });
            }
            Err(error) => {
                warn!(%strategy, %error, "strategy failed, trying next");
                attempts.push(Attempt { strategy, error });
            }
        }
    }

    Err(NoContentFound {
        url: url.to_string(),
        attempts,
    })
}
