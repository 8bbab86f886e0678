use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use super::Tool;
use crate::llm::LanguageModel;

const TEMPLATE: &str = r#"
Summarize this pull request for Slack:
- Use bullet points
- Add emojis where appropriate
- Keep it under 5 lines

Pull Request Content:
{content}
"#;

pub fn render_prompt(content: &str) -> String {
    TEMPLATE.replace("{content}", content)
}

/// Asks the model for a short Slack-ready summary. The line limit lives in
/// the prompt only; the reply is passed through untouched.
pub struct SummarizePr {
    model: Arc<dyn LanguageModel>,
}

impl SummarizePr {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Tool for SummarizePr {
    fn name(&self) -> &str {
        "SummarizePR"
    }

    fn description(&self) -> &str {
        "Summarize a pull request for Slack"
    }

    async fn invoke(&self, input: &str) -> Result<String> {
        self.model.complete(&render_prompt(input), &[]).await
    }
}
