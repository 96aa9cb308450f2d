use star_goal_notifier::error::StarGoalError;
use star_goal_notifier::github::RepoRecord;
use star_goal_notifier::goal::{format_message, should_notify};
use star_goal_notifier::poller::apply_fetch;
use star_goal_notifier::stars::sum_stars;
use star_goal_notifier::store::StateStore;
use std::time::Duration;

const GOAL: u64 = 10000;

fn listing(counts: &[u64]) -> Vec<RepoRecord> {
    counts
        .iter()
        .map(|count| {
            match serde_json::json!({"stargazers_count": count}) {
                serde_json::Value::Object(map) => map,
                _ => unreachable!(),
            }
        })
        .collect()
}

#[test]
fn test_successful_fetch_updates_store() {
    let store = StateStore::new(Duration::from_secs(60));

    let repos = listing(&[100, 200, 300]);
    let (prev, current) = apply_fetch(&store, Ok(sum_stars(&repos)));

    assert_eq!(prev, 0);
    assert_eq!(current, 600);
    assert_eq!(store.star_count(), 600);
    assert!(store.updated_at().is_some());
}

#[test]
fn test_failed_fetch_leaves_count_untouched() {
    let store = StateStore::new(Duration::from_secs(60));
    store.set_star_count(9980);

    let (prev, current) = apply_fetch(
        &store,
        Err(StarGoalError::Api("API request failed with status 500: boom".to_string())),
    );

    assert_eq!(prev, 9980);
    assert_eq!(current, 9980);
    assert_eq!(store.star_count(), 9980);
    assert!(!should_notify(prev, current, GOAL));
}

#[test]
fn test_identical_fetches_notify_once() {
    let store = StateStore::new(Duration::from_secs(60));
    let repos = listing(&[5000, 4980]);

    // First tick: count moves into the worthy window, so it notifies.
    let (prev, current) = apply_fetch(&store, Ok(sum_stars(&repos)));
    assert!(should_notify(prev, current, GOAL));

    // Second tick with the same listing: worthy but unchanged, suppressed.
    let (prev, current) = apply_fetch(&store, Ok(sum_stars(&repos)));
    assert!(!should_notify(prev, current, GOAL));
}

#[test]
fn test_end_to_end_scenario() {
    let store = StateStore::new(Duration::from_secs(60));
    assert_eq!(store.star_count(), 0);

    // First tick: repos sum to 9980 against a 10000 goal.
    let repos = listing(&[9000, 980]);
    let (prev, current) = apply_fetch(&store, Ok(sum_stars(&repos)));

    assert!(should_notify(prev, current, GOAL));
    assert_eq!(format_message(current, GOAL), "20 more stars to go!");

    // Second tick fetches the same total: no notification.
    let (prev, current) = apply_fetch(&store, Ok(sum_stars(&repos)));
    assert!(!should_notify(prev, current, GOAL));

    // Third tick reaches the goal exactly: celebration.
    let repos = listing(&[9000, 1000]);
    let (prev, current) = apply_fetch(&store, Ok(sum_stars(&repos)));

    assert!(should_notify(prev, current, GOAL));
    assert_eq!(format_message(current, GOAL), "YOU REACHED 10000 STARS");

    // Fourth tick overshoots: silent by design.
    let repos = listing(&[9000, 1005]);
    let (prev, current) = apply_fetch(&store, Ok(sum_stars(&repos)));

    assert!(!should_notify(prev, current, GOAL));
}
