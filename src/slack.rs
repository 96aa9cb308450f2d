use crate::error::{Result, StarGoalError};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::warn;

pub struct SlackNotifier {
    client: Client,
    webhook_url: String,
}

impl SlackNotifier {
    pub fn new(webhook_url: String) -> Result<Self> {
        if webhook_url.is_empty() {
            return Err(StarGoalError::Config(
                "Slack webhook URL is not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .user_agent("Star Goal Notifier/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(SlackNotifier { client, webhook_url })
    }

    /// Post a message to the configured Incoming Webhook.
    ///
    /// Success is any response from the webhook; a non-200 status is logged
    /// but not treated as a failure, and nothing is retried.
    pub async fn notify(&self, message: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&json!({ "text": message }))
            .send()
            .await
            .map_err(|e| StarGoalError::Notify(format!("webhook request failed: {}", e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(%status, "Slack webhook returned a non-200 status");
        }

        Ok(())
    }
}
