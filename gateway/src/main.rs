use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

use prpilot_core::{llm, Config, ReactAgent, Registry};
use prpilot_gateway::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging Setup
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .compact()
        .init();

    info!("PR Pilot Gateway Initializing...");

    let config = Arc::new(Config::from_env().context("Failed to load configuration")?);
    info!(
        "LLM provider: {} (model {})",
        config.provider.name(),
        config.provider.model()
    );

    // One pooled client for the webhook and the Ollama backend.
    let http = reqwest::Client::new();

    // The Brain
    let brain = llm::connect(&config.provider, http.clone());
    match brain.say_hello().await {
        Ok(msg) => info!("Brain Status: {}", msg.trim()),
        Err(e) => error!("Brain is online but unresponsive: {:#}", e),
    }

    // The Menu
    let registry = Arc::new(Registry::standard(&config, http, brain.clone()));
    info!(
        "Loaded {} tools available for the Brain: {}",
        registry.len(),
        registry.names().join(", ")
    );

    let state = AppState {
        dispatcher: Arc::new(ReactAgent::new(brain, config.max_iterations)),
        registry,
    };

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Gateway listening on {}...", config.bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
