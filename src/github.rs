use crate::error::{Result, StarGoalError};
use reqwest::Client;
use std::time::Duration;

const API_BASE_URL: &str = "https://api.github.com";

/// One repository from the GitHub API, kept as a generic mapping.
///
/// Only `stargazers_count` is ever read, with a defaulting lookup, so the
/// rest of the schema is deliberately left untyped.
pub type RepoRecord = serde_json::Map<String, serde_json::Value>;

pub struct GitHubClient {
    client: Client,
    token: String,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Star Goal Notifier/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient { client, token })
    }

    /// Fetch the repository listing for an organization path such as
    /// `/orgs/rust-lang/repos`. The path is appended to the API base verbatim.
    ///
    /// A non-200 status or transport failure is returned to the caller as-is;
    /// the poll loop logs it and tries again on its next tick, so there is no
    /// retry here.
    pub async fn fetch_org_repos(&self, org_path: &str) -> Result<Vec<RepoRecord>> {
        let url = format!("{}{}", API_BASE_URL, org_path);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .header("Authorization", format!("token {}", self.token))
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let error_text = response.text().await.unwrap_or_default();
            return Err(StarGoalError::Api(format!(
                "API request failed with status {}: {}",
                status, error_text
            )));
        }

        let repos: Vec<RepoRecord> = response.json().await?;
        Ok(repos)
    }
}
