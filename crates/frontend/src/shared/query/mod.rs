//! Query client - клиентский кеш результатов запросов к API рекомендаций.
//!
//! Сам кеш (`cache::QueryCache`) не зависит от реактивности; `QueryClient`
//! оборачивает его в сигнал, чтобы представления видели изменения.

pub mod cache;

pub use cache::{CachedQuery, QueryCache};

use chrono::{Duration, Utc};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: RwSignal<QueryCache>,
}

impl QueryClient {
    pub fn new(stale_secs: i64) -> Self {
        Self {
            cache: RwSignal::new(QueryCache::new(Duration::seconds(stale_secs))),
        }
    }

    /// Fresh cached value for `key`, if any. Stale or undecodable entries yield `None`.
    pub fn get_query_data<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let now = Utc::now();
        self.cache.with(|cache| {
            cache
                .get_fresh(key, now)
                .and_then(|value| serde_json::from_value(value.clone()).ok())
        })
    }

    pub fn set_query_data<T: Serialize>(&self, key: &str, data: &T) {
        match serde_json::to_value(data) {
            Ok(value) => {
                let now = Utc::now();
                self.cache.update(|cache| cache.set(key, value, now));
            }
            Err(e) => log::warn!("query '{}' not cached: {}", key, e),
        }
    }

    /// Fresh cached value for `key`, or the result of `load`, which is then cached.
    ///
    /// Reads untracked; call it when a view is built, not inside a reactive closure.
    pub fn fetch_query<T, F>(&self, key: &str, load: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        let now = Utc::now();
        let cached = self.cache.with_untracked(|cache| {
            cache
                .get_fresh(key, now)
                .and_then(|value| serde_json::from_value::<T>(value.clone()).ok())
        });
        if let Some(data) = cached {
            return data;
        }
        log::debug!("query '{}' loaded", key);
        let data = load();
        self.set_query_data(key, &data);
        data
    }

    /// Invalidates `prefix` and everything nested under it.
    pub fn invalidate_queries(&self, prefix: &str) -> usize {
        let mut dropped = 0;
        self.cache
            .update(|cache| dropped = cache.invalidate_prefix(prefix));
        log::debug!("invalidated {} queries under '{}'", dropped, prefix);
        dropped
    }

    pub fn clear(&self) -> usize {
        let mut dropped = 0;
        self.cache.update(|cache| dropped = cache.clear());
        log::debug!("query cache cleared ({} entries)", dropped);
        dropped
    }

    /// Reactive entry count.
    pub fn len(&self) -> usize {
        self.cache.with(|cache| cache.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
