//! Process configuration, read once at startup.
//!
//! Values come from the environment, after a `.env` file (if any) has been
//! loaded:
//! - `LLM_PROVIDER` - `openai` (default) or `ollama`.
//! - `OPENAI_API_KEY` - Required when the provider is `openai`.
//! - `OPENAI_MODEL` - Chat model. Defaults to `gpt-4o`.
//! - `OLLAMA_BASE_URL` - Defaults to `http://localhost:11434`.
//! - `OLLAMA_MODEL` - Defaults to `llama3`.
//! - `SLACK_WEBHOOK_URL` - Optional. The notifier is a no-op without it.
//! - `GATEWAY_ADDR` - Listen address. Defaults to `0.0.0.0:3000`.
//! - `AGENT_MAX_ITERATIONS` - Agent step limit. Defaults to `15`.

use thiserror::Error;
use tracing::warn;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";
pub const DEFAULT_GATEWAY_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_ITERATIONS: usize = 15;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Which language model backs the agent and the summarizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    OpenAi { api_key: String, model: String },
    Ollama { base_url: String, model: String },
}

impl ProviderConfig {
    pub fn name(&self) -> &'static str {
        match self {
            ProviderConfig::OpenAi { .. } => "openai",
            ProviderConfig::Ollama { .. } => "ollama",
        }
    }

    pub fn model(&self) -> &str {
        match self {
            ProviderConfig::OpenAi { model, .. } | ProviderConfig::Ollama { model, .. } => model,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderConfig,

    /// Slack incoming-webhook URL. `None` is a valid state.
    pub slack_webhook_url: Option<String>,

    pub bind_addr: String,

    /// Maximum think/act steps before the agent gives up.
    pub max_iterations: usize,
}

impl Config {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider_name = get("LLM_PROVIDER")
            .unwrap_or_else(|| "openai".to_string())
            .to_lowercase();

        let provider = match provider_name.as_str() {
            "ollama" => ProviderConfig::Ollama {
                base_url: get("OLLAMA_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_string()),
                model: get("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
            },
            other => {
                if other != "openai" {
                    warn!("Unknown LLM_PROVIDER '{}', falling back to openai", other);
                }
                ProviderConfig::OpenAi {
                    api_key: get("OPENAI_API_KEY")
                        .ok_or_else(|| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?,
                    model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                }
            }
        };

        let max_iterations = match get("AGENT_MAX_ITERATIONS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue(
                        "AGENT_MAX_ITERATIONS".to_string(),
                        raw,
                    ))
                }
            },
            None => DEFAULT_MAX_ITERATIONS,
        };

        Ok(Self {
            provider,
            slack_webhook_url: get("SLACK_WEBHOOK_URL"),
            bind_addr: get("GATEWAY_ADDR").unwrap_or_else(|| DEFAULT_GATEWAY_ADDR.to_string()),
            max_iterations,
        })
    }
}
