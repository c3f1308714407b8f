//! A small time-to-live cache for model data downloads.
//!
//! This belongs to whatever fetches data for the engine, the index calculations never touch it.
//! Time is passed in explicitly so expiry is deterministic.
use chrono::{DateTime, Duration, Utc};
use std::{collections::HashMap, hash::Hash};
use tracing::trace;

#[derive(Clone, Debug)]
struct Entry<V> {
    value: V,
    stored_at: DateTime<Utc>,
    ttl: Duration,
}

impl<V> Entry<V> {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.stored_at < self.ttl
    }
}

/// Cache values, e.g. a download keyed by location and variable list, for a limited time.
#[derive(Clone, Debug)]
pub struct TtlCache<K, V> {
    entries: HashMap<K, Entry<V>>,
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        TtlCache {
            entries: HashMap::new(),
        }
    }
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    /// Create an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for `key` if it was stored less than its time to live before `now`, otherwise
    /// call `fetch` and store what it returns.
    ///
    /// Errors from `fetch` are returned and not cached, the next call will try again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{Duration, TimeZone, Utc};
    /// use sounding_indices::TtlCache;
    ///
    /// let mut cache: TtlCache<&str, u32> = TtlCache::new();
    /// let ttl = Duration::minutes(15);
    /// let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    ///
    /// let first: Result<u32, ()> = cache.get_or_fetch("istanbul", ttl, now, |_| Ok(1));
    /// let second: Result<u32, ()> = cache.get_or_fetch("istanbul", ttl, now, |_| Ok(2));
    /// assert_eq!(first, Ok(1));
    /// assert_eq!(second, Ok(1));
    ///
    /// let later = now + Duration::minutes(20);
    /// let third: Result<u32, ()> = cache.get_or_fetch("istanbul", ttl, later, |_| Ok(3));
    /// assert_eq!(third, Ok(3));
    /// ```
    pub fn get_or_fetch<F, E>(
        &mut self,
        key: K,
        ttl: Duration,
        now: DateTime<Utc>,
        fetch: F,
    ) -> Result<V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        if let Some(entry) = self.entries.get(&key) {
            if entry.is_fresh(now) {
                trace!("cache hit");
                return Ok(entry.value.clone());
            }
        }

        let value = fetch(&key)?;
        self.entries.insert(
            key,
            Entry {
                value: value.clone(),
                stored_at: now,
                ttl,
            },
        );

        Ok(value)
    }

    /// Same as `get_or_fetch`, using the current time.
    #[inline]
    pub fn get_or_fetch_now<F, E>(&mut self, key: K, ttl: Duration, fetch: F) -> Result<V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        self.get_or_fetch(key, ttl, Utc::now(), fetch)
    }

    /// Remove a value, returning it if it was present.
    #[inline]
    pub fn invalidate(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    /// Drop every value that has expired as of `now`.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) {
        self.entries.retain(|_, entry| entry.is_fresh(now));
    }

    /// The number of values stored, including any that have expired but not been purged.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
