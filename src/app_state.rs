use crate::analysis::{HfPipelines, Pipelines};
use crate::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pipelines: Arc<dyn Pipelines>,
    pub hf_api_base: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            pipelines: Arc::new(HfPipelines::from_config(config)),
            hf_api_base: config.hf_api_base().to_string(),
        }
    }
}
