use clap::Parser;

#[derive(Parser)]
#[command(name = "star-goal-notifier")]
#[command(about = "Star Goal Notifier - Polls an organization's GitHub stars and posts to Slack near a goal")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub API path for the organization's repository listing
    #[arg(long, env = "GH_ORG_PATH", default_value = "/orgs/rust-lang/repos")]
    pub org_path: String,

    /// GitHub bearer token
    #[arg(long, env = "GH_TOKEN", default_value = "", hide_env_values = true)]
    pub gh_token: String,

    /// Slack Incoming Webhook URL
    #[arg(long, env = "SLACK_WEBHOOK", default_value = "", hide_env_values = true)]
    pub slack_webhook: String,

    /// Star count goal that triggers the celebration message
    #[arg(long, env = "STAR_GOAL", default_value = "10000")]
    pub goal: u64,

    /// Seconds between polls
    #[arg(long, env = "POLL_INTERVAL_SECS", default_value = "60")]
    pub poll_interval_secs: u64,

    /// Port for the status HTTP server
    #[arg(long, env = "STATUS_PORT", default_value = "3000")]
    pub status_port: u16,
}
