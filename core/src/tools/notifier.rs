use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use super::Tool;

pub const NOT_CONFIGURED: &str = "❌ Slack webhook not configured.";

/// Posts agent messages to a Slack incoming webhook.
pub struct NotifySlack {
    http: reqwest::Client,
    webhook_url: Option<String>,
}

impl NotifySlack {
    pub fn new(http: reqwest::Client, webhook_url: Option<String>) -> Self {
        if webhook_url.is_none() {
            warn!("SLACK_WEBHOOK_URL not set; NotifySlack will not send anything");
        }
        Self { http, webhook_url }
    }

    /// Send `message` once. A non-2xx status is reported in the returned
    /// text; transport errors are returned as `Err`.
    pub async fn notify(&self, message: &str) -> Result<String> {
        let Some(url) = self.webhook_url.as_deref() else {
            return Ok(NOT_CONFIGURED.to_string());
        };

        let payload = json!({ "text": message, "mrkdwn": true });
        let response = self.http.post(url).json(&payload).send().await?;
        let status = response.status().as_u16();

        info!("Slack webhook answered {}", status);
        Ok(format!("✅ Sent to Slack: {}", status))
    }
}

#[async_trait]
impl Tool for NotifySlack {
    fn name(&self) -> &str {
        "NotifySlack"
    }

    fn description(&self) -> &str {
        "Send a message to Slack via webhook"
    }

    async fn invoke(&self, input: &str) -> Result<String> {
        self.notify(input).await
    }
}
