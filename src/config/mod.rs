//! Configuration handling for the application.
//!
//! Everything is read from environment variables with sensible development
//! defaults, so a bare `cargo run` works against the public inference API.
//! The `Config::from_env` method performs that loading.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets tests and deployment
/// tooling refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_HF_API_BASE: &str = "HF_API_BASE";
pub const ENV_HF_API_TOKEN: &str = "HF_API_TOKEN";
pub const ENV_SENTIMENT_MODEL: &str = "SENTIMENT_MODEL";
pub const ENV_NER_MODEL: &str = "NER_MODEL";
pub const ENV_IMPACT_MODEL: &str = "IMPACT_MODEL";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_HF_API_BASE: &str = "https://api-inference.huggingface.co";
const DEFAULT_SENTIMENT_MODEL: &str = "yiyanghkust/finbert-tone";
const DEFAULT_NER_MODEL: &str = "abhay2727/Bert-NER-Finance";
const DEFAULT_IMPACT_MODEL: &str = "abhay2727/Final_finance_model";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    hf_api_base: String,
    hf_api_token: Option<String>,
    sentiment_model: String,
    ner_model: String,
    impact_model: String,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(
        bind_addr: impl Into<String>,
        hf_api_base: impl Into<String>,
        hf_api_token: Option<String>,
        sentiment_model: impl Into<String>,
        ner_model: impl Into<String>,
        impact_model: impl Into<String>,
    ) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            hf_api_base: hf_api_base.into(),
            hf_api_token,
            sentiment_model: sentiment_model.into(),
            ner_model: ner_model.into(),
            impact_model: impact_model.into(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    ///
    /// This never fails today because we only do simple string extraction,
    /// but validation (e.g. parse the bind address) can cause it to return a
    /// `ConfigError` later.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let hf_api_base =
            env::var(ENV_HF_API_BASE).unwrap_or_else(|_| DEFAULT_HF_API_BASE.to_string());
        // An empty token means unauthenticated requests, same as no token.
        let hf_api_token = env::var(ENV_HF_API_TOKEN).ok().filter(|t| !t.is_empty());
        let sentiment_model =
            env::var(ENV_SENTIMENT_MODEL).unwrap_or_else(|_| DEFAULT_SENTIMENT_MODEL.to_string());
        let ner_model = env::var(ENV_NER_MODEL).unwrap_or_else(|_| DEFAULT_NER_MODEL.to_string());
        let impact_model =
            env::var(ENV_IMPACT_MODEL).unwrap_or_else(|_| DEFAULT_IMPACT_MODEL.to_string());
        Ok(Self {
            bind_addr,
            hf_api_base,
            hf_api_token,
            sentiment_model,
            ner_model,
            impact_model,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Base URL of the inference API.
    pub fn hf_api_base(&self) -> &str {
        &self.hf_api_base
    }
    /// Bearer token for the inference API, if configured.
    pub fn hf_api_token(&self) -> Option<&str> {
        self.hf_api_token.as_deref()
    }
    /// Model id for tone classification.
    pub fn sentiment_model(&self) -> &str {
        &self.sentiment_model
    }
    /// Model id for named entity recognition.
    pub fn ner_model(&self) -> &str {
        &self.ner_model
    }
    /// Model id for market impact classification.
    pub fn impact_model(&self) -> &str {
        &self.impact_model
    }

    /// Development defaults (mirrors `from_env` with no env overrides).
    pub fn default() -> Self {
        Self::new(
            DEFAULT_BIND_ADDR,
            DEFAULT_HF_API_BASE,
            None,
            DEFAULT_SENTIMENT_MODEL,
            DEFAULT_NER_MODEL,
            DEFAULT_IMPACT_MODEL,
        )
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [
            ENV_BIND_ADDR,
            ENV_HF_API_BASE,
            ENV_HF_API_TOKEN,
            ENV_SENTIMENT_MODEL,
            ENV_NER_MODEL,
            ENV_IMPACT_MODEL,
        ] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn defaults_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), super::DEFAULT_BIND_ADDR);
        assert_eq!(cfg.hf_api_base(), super::DEFAULT_HF_API_BASE);
        assert_eq!(cfg.hf_api_token(), None);
        assert_eq!(cfg.sentiment_model(), super::DEFAULT_SENTIMENT_MODEL);
        assert_eq!(cfg.ner_model(), super::DEFAULT_NER_MODEL);
        assert_eq!(cfg.impact_model(), super::DEFAULT_IMPACT_MODEL);
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_BIND_ADDR, "0.0.0.0:9000");
            env::set_var(ENV_HF_API_BASE, "http://localhost:9090");
            env::set_var(ENV_HF_API_TOKEN, "hf_test");
            env::set_var(ENV_SENTIMENT_MODEL, "acme/tone");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.hf_api_base(), "http://localhost:9090");
        assert_eq!(cfg.hf_api_token(), Some("hf_test"));
        assert_eq!(cfg.sentiment_model(), "acme/tone");
        clear_env();
    }

    #[test]
    fn empty_token_means_unauthenticated() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_HF_API_TOKEN, "");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.hf_api_token(), None);
        clear_env();
    }
}
