use anyhow::Result;
use async_trait::async_trait;

use super::Tool;

pub const LABEL_DOCS: &str = "📄 Documentation Update";
pub const LABEL_TESTS: &str = "🧪 Test Improvements";
pub const LABEL_FEATURE: &str = "✨ Feature Implementation";

/// Pick a PR label from a free-form list of changed paths. `docs/` wins over
/// `test/`; anything else is a feature.
pub fn suggest_pr_template(changed_files: &str) -> &'static str {
    if changed_files.contains("docs/") {
        LABEL_DOCS
    } else if changed_files.contains("test/") {
        LABEL_TESTS
    } else {
        LABEL_FEATURE
    }
}

pub struct SuggestPrTemplate;

#[async_trait]
impl Tool for SuggestPrTemplate {
    fn name(&self) -> &str {
        "SuggestPRTemplate"
    }

    fn description(&self) -> &str {
        "Suggest a PR label based on changed files"
    }

    async fn invoke(&self, input: &str) -> Result<String> {
        Ok(suggest_pr_template(input).to_string())
    }
}
