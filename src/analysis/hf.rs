//! Hosted inference over a Hugging Face Inference-API-style endpoint.
//!
//! Each pipeline is one `POST {base}/models/{id}` with `{"inputs": ...}`.
//! Classification models answer with a nested list of label/score pairs,
//! token-classification models with a flat list of aggregated entities.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::analysis::types::{Entity, ImpactDirection, ImpactPrediction, Sentiment};
use crate::analysis::{AnalysisError, Pipelines};
use crate::config::Config;

// Hosted models can take a while to answer from a cold start.
static INFERENCE_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to build inference client")
});

#[derive(Debug, Deserialize)]
struct Classification {
    label: String,
    score: f32,
}

#[derive(Debug, Deserialize)]
struct RecognizedEntity {
    word: String,
    entity_group: String,
}

pub struct HfPipelines {
    base_url: String,
    token: Option<String>,
    sentiment_model: String,
    ner_model: String,
    impact_model: String,
}

impl fmt::Debug for HfPipelines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HfPipelines")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_deref().map(|_| "<redacted>"))
            .field("sentiment_model", &self.sentiment_model)
            .field("ner_model", &self.ner_model)
            .field("impact_model", &self.impact_model)
            .finish()
    }
}

impl HfPipelines {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        sentiment_model: impl Into<String>,
        ner_model: impl Into<String>,
        impact_model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            token,
            sentiment_model: sentiment_model.into(),
            ner_model: ner_model.into(),
            impact_model: impact_model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.hf_api_base(),
            config.hf_api_token().map(str::to_string),
            config.sentiment_model(),
            config.ner_model(),
            config.impact_model(),
        )
    }

    #[instrument(skip_all, fields(model = %model))]
    async fn call(&self, model: &str, text: &str) -> Result<reqwest::Response, AnalysisError> {
        let url = format!("{}/models/{}", self.base_url, model);
        let mut request = INFERENCE_CLIENT.post(url).json(&json!({ "inputs": text }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AnalysisError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status {
                model: model.to_string(),
                status,
            });
        }

        Ok(response)
    }

    /// Top classification for a single input, i.e. the first entry of the
    /// first (and only) batch in the response.
    async fn classify(&self, model: &str, text: &str) -> Result<Classification, AnalysisError> {
        let response = self.call(model, text).await?;
        let batches: Vec<Vec<Classification>> = response
            .json()
            .await
            .map_err(|e| AnalysisError::Decode(e.to_string()))?;

        batches
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| AnalysisError::Decode("empty classification response".to_string()))
    }
}

#[async_trait]
impl Pipelines for HfPipelines {
    async fn sentiment(&self, text: &str) -> Result<Sentiment, AnalysisError> {
        let top = self.classify(&self.sentiment_model, text).await?;
        Ok(Sentiment {
            label: top.label,
            score: top.score,
        })
    }

    async fn entities(&self, text: &str) -> Result<Vec<Entity>, AnalysisError> {
        let response = self.call(&self.ner_model, text).await?;
        let recognized: Vec<RecognizedEntity> = response
            .json()
            .await
            .map_err(|e| AnalysisError::Decode(e.to_string()))?;

        Ok(recognized
            .into_iter()
            .map(|e| Entity {
                text: e.word,
                category: e.entity_group,
            })
            .collect())
    }

    async fn market_impact(&self, text: &str) -> Result<ImpactPrediction, AnalysisError> {
        let top = self.classify(&self.impact_model, text).await?;
        let direction = match top.label.to_ascii_uppercase().as_str() {
            "UP" => ImpactDirection::Up,
            "DOWN" => ImpactDirection::Down,
            "NEUTRAL" => ImpactDirection::Neutral,
            _ => {
                return Err(AnalysisError::UnexpectedLabel {
                    model: self.impact_model.clone(),
                    label: top.label,
                });
            }
        };

        Ok(ImpactPrediction {
            direction,
            score: top.score,
        })
    }
}
