use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

pub const STAR_COUNT_KEY: &str = "star_count";
pub const POLL_INTERVAL_KEY: &str = "poll_interval";
pub const UPDATED_AT_KEY: &str = "updated_at";

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Values the store knows how to hold.
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    Count(u64),
    Interval(Duration),
    Timestamp(DateTime<Utc>),
}

/// Shared state for the poll loop and any reader (e.g. the status endpoint).
///
/// The poll loop is the only writer; readers go through the same lock. Built
/// once at startup and passed around as `Arc<StateStore>` rather than living
/// in a process-wide global.
#[derive(Debug, Default)]
pub struct StateStore {
    entries: RwLock<HashMap<String, StateValue>>,
}

impl StateStore {
    pub fn new(poll_interval: Duration) -> Self {
        let store = StateStore::default();
        store.put(POLL_INTERVAL_KEY, StateValue::Interval(poll_interval));
        store
    }

    /// Absent keys return `None`, never an error.
    pub fn get(&self, key: &str) -> Option<StateValue> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    pub fn put(&self, key: &str, value: StateValue) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value);
    }

    /// Star count from the most recent successful fetch, 0 before the first one.
    pub fn star_count(&self) -> u64 {
        match self.get(STAR_COUNT_KEY) {
            Some(StateValue::Count(count)) => count,
            _ => 0,
        }
    }

    pub fn set_star_count(&self, count: u64) {
        self.put(STAR_COUNT_KEY, StateValue::Count(count));
    }

    /// Reread every tick so a future runtime reconfiguration takes effect
    /// without restarting the loop.
    pub fn poll_interval(&self) -> Duration {
        match self.get(POLL_INTERVAL_KEY) {
            Some(StateValue::Interval(interval)) => interval,
            _ => DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn set_poll_interval(&self, interval: Duration) {
        self.put(POLL_INTERVAL_KEY, StateValue::Interval(interval));
    }

    /// Time of the last successful fetch, if any.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        match self.get(UPDATED_AT_KEY) {
            Some(StateValue::Timestamp(at)) => Some(at),
            _ => None,
        }
    }

    pub fn set_updated_at(&self, at: DateTime<Utc>) {
        self.put(UPDATED_AT_KEY, StateValue::Timestamp(at));
    }
}
