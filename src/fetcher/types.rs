use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// A fetched HTML document, decoded to UTF-8.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub body: String,
    pub encoding: &'static str,
    pub fetched_at: DateTime<Utc>,
}
