use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Classifier output for the tone of an article snippet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Sentiment {
    /// Model label, e.g. `Positive`, `Negative` or `Neutral`.
    pub label: String,
    /// Confidence in `[0, 1]`.
    pub score: f32,
}

/// A named entity recognized in the snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Entity {
    /// Surface text as it appeared in the snippet.
    pub text: String,
    /// Aggregated entity group, e.g. `ORG` or `PER`.
    pub category: String,
}

/// Predicted direction of short-term market reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImpactDirection {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImpactPrediction {
    pub direction: ImpactDirection,
    /// Confidence in `[0, 1]`.
    pub score: f32,
}
