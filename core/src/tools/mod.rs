//! The tools the agent can call.
//!
//! Every tool takes one string and returns one string, which is what the
//! zero-shot agent format (`Action Input:` / `Observation:`) can carry.

mod classifier;
mod notifier;
mod summarizer;

pub use classifier::{suggest_pr_template, SuggestPrTemplate, LABEL_DOCS, LABEL_FEATURE, LABEL_TESTS};
pub use notifier::{NotifySlack, NOT_CONFIGURED};
pub use summarizer::{render_prompt, SummarizePr};

use anyhow::Result;
use async_trait::async_trait;

/// A named capability the agent may invoke.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Identifier the model writes after `Action:`.
    fn name(&self) -> &str;

    /// Natural-language hint the model uses to decide when to call the tool.
    fn description(&self) -> &str;

    async fn invoke(&self, input: &str) -> Result<String>;
}
