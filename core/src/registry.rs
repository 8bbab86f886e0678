use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;

use crate::config::Config;
use crate::llm::LanguageModel;
use crate::tools::{NotifySlack, SuggestPrTemplate, SummarizePr, Tool};

/// The fixed, ordered set of tools offered to the agent.
#[derive(Clone)]
pub struct Registry {
    tools: Vec<Arc<dyn Tool>>,
}

impl Registry {
    /// Tool names must be unique; order is kept as given.
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Result<Self> {
        let mut seen = HashSet::new();
        for tool in &tools {
            if !seen.insert(tool.name().to_string()) {
                anyhow::bail!("Tool '{}' registered twice", tool.name());
            }
        }
        Ok(Self { tools })
    }

    /// PR label suggestion, Slack notification and PR summarization.
    pub fn standard(config: &Config, http: reqwest::Client, model: Arc<dyn LanguageModel>) -> Self {
        Self {
            tools: vec![
                Arc::new(SuggestPrTemplate),
                Arc::new(NotifySlack::new(http, config.slack_webhook_url.clone())),
                Arc::new(SummarizePr::new(model)),
            ],
        }
    }

    pub fn find(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.tools.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
