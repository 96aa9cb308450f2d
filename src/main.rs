use clap::Parser;
use colored::*;
use star_goal_notifier::cli::Cli;
use star_goal_notifier::error::Result;
use star_goal_notifier::github::GitHubClient;
use star_goal_notifier::poller::Poller;
use star_goal_notifier::slack::SlackNotifier;
use star_goal_notifier::status::{start_status_server, AppState};
use star_goal_notifier::store::StateStore;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "Star Goal Notifier".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());
    println!("📡 Polling {} every {}s", cli.org_path, cli.poll_interval_secs);
    println!("🎯 Goal: {} stars\n", cli.goal);

    let store = Arc::new(StateStore::new(Duration::from_secs(cli.poll_interval_secs)));

    let github = GitHubClient::new(cli.gh_token.clone())?;
    let slack = SlackNotifier::new(cli.slack_webhook.clone())?;

    let poller = Poller::new(
        github,
        slack,
        store.clone(),
        cli.org_path.clone(),
        cli.goal,
    );
    tokio::spawn(poller.run());

    let app_state = AppState {
        store: store.clone(),
        goal: cli.goal,
    };
    let status_port = cli.status_port;
    tokio::spawn(async move {
        if let Err(e) = start_status_server(app_state, status_port).await {
            eprintln!("Status server failed: {}", e);
        }
    });

    println!("Press Ctrl+C to stop the server\n");

    // The poll loop has no shutdown protocol; the process just exits.
    tokio::signal::ctrl_c().await.ok();
    println!("\n🛑 Shutting down server...");

    Ok(())
}
