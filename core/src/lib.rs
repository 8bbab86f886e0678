//! Core of the PR Pilot agent: configuration, language-model backends, the
//! tool registry and the agent that drives it.

pub mod agent;
pub mod config;
pub mod llm;
pub mod registry;
pub mod tools;

pub use agent::{AgentResult, Dispatcher, ReactAgent};
pub use config::{Config, ConfigError, ProviderConfig};
pub use llm::LanguageModel;
pub use registry::Registry;
