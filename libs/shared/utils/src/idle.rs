use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use shared_config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleLimits {
    pub idle_timeout: Duration,
    pub capacity: usize,
}

impl IdleLimits {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            idle_timeout: config.session_idle_timeout(),
            capacity: config.max_open_sessions,
        }
    }
}

impl Default for IdleLimits {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    last_touched: Instant,
}

/// A map whose entries expire once untouched for `idle_timeout`. Every read
/// or write through `get`/`get_mut` counts as a touch. Expired entries are
/// swept on insert, and an insert at capacity also evicts the least
/// recently touched entry. Evicted values are dropped.
#[derive(Debug)]
pub struct IdleMap<K, V> {
    entries: HashMap<K, Entry<V>>,
    limits: IdleLimits,
}

impl<K, V> Default for IdleMap<K, V> {
    fn default() -> Self {
        Self::new(IdleLimits::default())
    }
}

impl<K, V> IdleMap<K, V> {
    pub fn new(limits: IdleLimits) -> Self {
        Self {
            entries: HashMap::new(),
            limits,
        }
    }

    pub fn limits(&self) -> IdleLimits {
        self.limits
    }

    /// Includes expired entries that have not been swept yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash + Clone, V> IdleMap<K, V> {
    /// Returns how many entries were evicted to make room.
    pub fn insert(&mut self, key: K, value: V) -> usize {
        let mut evicted = self.evict_idle();

        while self.entries.len() >= self.limits.capacity.max(1) {
            let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_touched)
                .map(|(key, _)| key.clone())
            else {
                break;
            };
            self.entries.remove(&oldest);
            evicted += 1;
        }

        self.entries.insert(
            key,
            Entry {
                value,
                last_touched: Instant::now(),
            },
        );
        evicted
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = Instant::now();
        let idle_timeout = self.limits.idle_timeout;

        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| now.duration_since(entry.last_touched) >= idle_timeout);
        if expired {
            self.entries.remove(key);
            return None;
        }

        let entry = self.entries.get_mut(key)?;
        entry.last_touched = now;
        Some(&mut entry.value)
    }

    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_mut(key).map(|value| &*value)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key).map(|entry| entry.value)
    }

    pub fn evict_idle(&mut self) -> usize {
        let now = Instant::now();
        let idle_timeout = self.limits.idle_timeout;
        let before = self.entries.len();

        self.entries
            .retain(|_, entry| now.duration_since(entry.last_touched) < idle_timeout);

        let evicted = before - self.entries.len();
        if evicted > 0 {
            debug!("Evicted {} idle entries", evicted);
        }
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(idle_secs: u64, capacity: usize) -> IdleLimits {
        IdleLimits {
            idle_timeout: Duration::from_secs(idle_secs),
            capacity,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn idle_entries_are_swept_on_insert() {
        let mut map = IdleMap::new(limits(60, 100));
        map.insert("a", 1);
        map.insert("b", 2);

        tokio::time::advance(Duration::from_secs(30)).await;
        assert_eq!(map.get("a"), Some(&1));

        tokio::time::advance(Duration::from_secs(45)).await;
        assert_eq!(map.insert("c", 3), 1);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("b"), None);
        assert_eq!(map.get("a"), Some(&1));
    }

    #[tokio::test(start_paused = true)]
    async fn expired_entry_is_not_returned() {
        let mut map = IdleMap::new(limits(60, 100));
        map.insert("a", 1);

        tokio::time::advance(Duration::from_secs(60)).await;
        assert_eq!(map.get_mut("a"), None);
        assert!(map.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn capacity_evicts_least_recently_touched() {
        let mut map = IdleMap::new(limits(600, 2));
        map.insert("a", 1);
        tokio::time::advance(Duration::from_secs(1)).await;
        map.insert("b", 2);
        tokio::time::advance(Duration::from_secs(1)).await;
        map.get("a");

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(map.insert("c", 3), 1);
        assert_eq!(map.len(), 2);
        assert_eq!(map.remove("b"), None);
        assert_eq!(map.remove("a"), Some(1));
    }
}
