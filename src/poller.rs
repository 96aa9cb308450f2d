use crate::error::Result;
use crate::github::GitHubClient;
use crate::goal;
use crate::slack::SlackNotifier;
use crate::stars::sum_stars;
use crate::store::StateStore;
use chrono::Utc;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::{error, info};

/// The one active component: fetch, aggregate, store, decide, notify, sleep.
pub struct Poller {
    github: GitHubClient,
    slack: SlackNotifier,
    store: Arc<StateStore>,
    org_path: String,
    goal: u64,
}

impl Poller {
    pub fn new(
        github: GitHubClient,
        slack: SlackNotifier,
        store: Arc<StateStore>,
        org_path: String,
        goal: u64,
    ) -> Self {
        Poller {
            github,
            slack,
            store,
            org_path,
            goal,
        }
    }

    /// Run ticks until the process exits. The interval is reread from the
    /// store on every iteration rather than cached.
    pub async fn run(self) {
        info!(org_path = %self.org_path, goal = self.goal, "poll loop started");

        loop {
            self.tick().await;
            sleep(self.store.poll_interval()).await;
        }
    }

    /// One tick. Every failure is logged and recovered here so the loop
    /// never dies; the next tick is an independent attempt.
    async fn tick(&self) {
        let fetched = self.github.fetch_org_repos(&self.org_path).await;
        let (prev, current) = apply_fetch(&self.store, fetched.map(|repos| sum_stars(&repos)));

        if goal::should_notify(prev, current, self.goal) {
            let message = goal::format_message(current, self.goal);
            match self.slack.notify(&message).await {
                Ok(()) => info!(%message, "Slack notification sent"),
                Err(e) => error!("Failed to send Slack notification: {}", e),
            }
        }

        info!(stars = current, goal = self.goal, "tick complete");
    }
}

/// Apply one fetch outcome to the store and report the counts before and
/// after. A failed fetch logs its reason and leaves the stored count
/// untouched, so the two counts come back equal.
pub fn apply_fetch(store: &StateStore, fetched: Result<u64>) -> (u64, u64) {
    let prev = store.star_count();

    match fetched {
        Ok(total) => {
            store.set_star_count(total);
            store.set_updated_at(Utc::now());
        }
        Err(e) => {
            error!("Failed to fetch repositories: {}", e);
        }
    }

    (prev, store.star_count())
}
