use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CachedQuery {
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// Keyed store of query results with a single staleness window.
///
/// Keys are slash-separated paths ("recommendations/42"), so a prefix
/// addresses a family of queries.
#[derive(Debug, Clone)]
pub struct QueryCache {
    entries: HashMap<String, CachedQuery>,
    stale_after: Duration,
}

impl QueryCache {
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_after,
        }
    }

    pub fn get(&self, key: &str) -> Option<&CachedQuery> {
        self.entries.get(key)
    }

    /// Missing entries count as stale.
    pub fn is_stale(&self, key: &str, now: DateTime<Utc>) -> bool {
        match self.entries.get(key) {
            Some(entry) => now - entry.updated_at >= self.stale_after,
            None => true,
        }
    }

    /// Value for `key` only while it is still fresh.
    pub fn get_fresh(&self, key: &str, now: DateTime<Utc>) -> Option<&serde_json::Value> {
        if self.is_stale(key, now) {
            return None;
        }
        self.entries.get(key).map(|e| &e.value)
    }

    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value, now: DateTime<Utc>) {
        self.entries.insert(
            key.into(),
            CachedQuery {
                value,
                updated_at: now,
            },
        );
    }

    pub fn invalidate(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drops every entry equal to `prefix` or nested under it. Returns how many were dropped.
    pub fn invalidate_prefix(&mut self, prefix: &str) -> usize {
        let before = self.entries.len();
        let nested = format!("{}/", prefix.trim_end_matches('/'));
        self.entries
            .retain(|key, _| key != prefix && !key.starts_with(&nested));
        before - self.entries.len()
    }

    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
