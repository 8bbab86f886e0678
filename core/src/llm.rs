use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, Stop,
    },
    Client,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::ProviderConfig;

/// A single-turn text completion backend.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    /// Complete `prompt`, cutting generation at any of `stop`. The text is
    /// returned as the model wrote it.
    async fn complete(&self, prompt: &str, stop: &[String]) -> Result<String>;

    /// Quick connectivity check used at startup.
    async fn say_hello(&self) -> Result<String> {
        self.complete("Hello! Reply with 'System Online'.", &[]).await
    }
}

/// Build the backend selected by the configuration.
pub fn connect(provider: &ProviderConfig, http: reqwest::Client) -> Arc<dyn LanguageModel> {
    match provider {
        ProviderConfig::OpenAi { api_key, model } => {
            Arc::new(OpenAiBrain::new(api_key, model))
        }
        ProviderConfig::Ollama { base_url, model } => {
            Arc::new(OllamaBrain::new(http, base_url, model))
        }
    }
}

/// Hosted OpenAI chat completions, temperature 0.
pub struct OpenAiBrain {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiBrain {
    pub fn new(api_key: &str, model: &str) -> Self {
        Self::with_config(OpenAIConfig::new().with_api_key(api_key), model)
    }

    /// Any OpenAI-compatible endpoint, e.g. a proxy set via `with_api_base`.
    pub fn with_config(config: OpenAIConfig, model: &str) -> Self {
        let client = Client::with_config(config);

        info!("Brain connected. Model: {}", model);
        Self {
            client,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl LanguageModel for OpenAiBrain {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str, stop: &[String]) -> Result<String> {
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&self.model)
            .temperature(0.0)
            .messages([ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?,
            )]);
        if !stop.is_empty() {
            args.stop(Stop::StringArray(stop.to_vec()));
        }
        let request = args.build()?;

        let response = self.client.chat().create(request).await?;
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .context("OpenAI returned no completion choices")?;

        debug!("OpenAI completion: {} bytes", content.len());
        Ok(content)
    }
}

/// Local Ollama server, `/api/generate` without streaming.
pub struct OllamaBrain {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaBrain {
    pub fn new(http: reqwest::Client, base_url: &str, model: &str) -> Self {
        info!("Brain connected. Ollama at {} with model {}", base_url, model);
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl LanguageModel for OllamaBrain {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str, stop: &[String]) -> Result<String> {
        let body = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": { "stop": stop },
        });

        let response = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Ollama returned {}: {}", status.as_u16(), error_text);
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        debug!("Ollama completion: {} bytes", generated.response.len());
        Ok(generated.response)
    }
}
