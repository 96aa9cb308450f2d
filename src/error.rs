use thiserror::Error;

#[derive(Error, Debug)]
pub enum StarGoalError {
    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Slack notification error: {0}")]
    Notify(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StarGoalError>;
