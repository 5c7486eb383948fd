//! Financial NLP over extracted article text.
//!
//! The [`Pipelines`] trait is the seam between the web layer and the model
//! backend: handlers only see the trait, the hosted implementation lives in
//! [`hf`], and tests substitute a mock.

pub mod hf;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

pub use hf::HfPipelines;
pub use types::{Entity, ImpactDirection, ImpactPrediction, Sentiment};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("inference request failed: {0}")]
    Request(String),

    #[error("model {model} returned status {status}")]
    Status {
        model: String,
        status: reqwest::StatusCode,
    },

    #[error("could not decode model response: {0}")]
    Decode(String),

    #[error("model {model} returned unexpected label {label:?}")]
    UnexpectedLabel { model: String, label: String },
}

/// The three inference passes run over an article snippet.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Pipelines: Send + Sync {
    /// Tone classification of the snippet.
    async fn sentiment(&self, text: &str) -> Result<Sentiment, AnalysisError>;

    /// Named entities found in the snippet.
    async fn entities(&self, text: &str) -> Result<Vec<Entity>, AnalysisError>;

    /// Predicted market reaction direction.
    async fn market_impact(&self, text: &str) -> Result<ImpactPrediction, AnalysisError>;
}
