//! Score cache using moka.
//!
//! Scores are keyed by normalized subject and a time bucket, so repeated
//! lookups inside one bucket reuse the earlier result and a new bucket
//! forces a fresh score.

use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::sync::Cache;

use repute_core::address;
use repute_core::config::ScoringConfig;
use repute_core::models::ReputationScore;

/// moka rejects TTLs beyond roughly a thousand years.
const MAX_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// `(normalized subject, bucket index)`.
pub type ScoreKey = (String, i64);

/// Thread-safe cache of computed scores.
pub struct ScoreCache {
    cache: Cache<ScoreKey, ReputationScore>,
    bucket_secs: i64,
}

impl ScoreCache {
    /// Create a cache holding up to `capacity` scores in `bucket_secs` buckets.
    /// A zero bucket width is treated as one second.
    pub fn new(capacity: u64, bucket_secs: u64) -> Self {
        let bucket_secs = bucket_secs.max(1);
        let cache = Cache::builder()
            .max_capacity(capacity)
            // Entries from a past bucket are never read again.
            .time_to_live(Duration::from_secs(bucket_secs.saturating_mul(2).min(MAX_TTL_SECS)))
            .support_invalidation_closures()
            .build();

        Self {
            cache,
            bucket_secs: i64::try_from(bucket_secs).unwrap_or(i64::MAX),
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.cache_capacity, config.cache_bucket_secs)
    }

    pub fn key(&self, subject: &str, now: DateTime<Utc>) -> ScoreKey {
        (
            address::normalize(subject),
            now.timestamp().div_euclid(self.bucket_secs),
        )
    }

    pub fn get(&self, subject: &str, now: DateTime<Utc>) -> Option<ReputationScore> {
        self.cache.get(&self.key(subject, now))
    }

    pub fn insert(&self, subject: &str, now: DateTime<Utc>, score: ReputationScore) {
        self.cache.insert(self.key(subject, now), score);
    }

    /// Return the cached score for this bucket or compute and store it.
    pub fn get_or_compute<F>(&self, subject: &str, now: DateTime<Utc>, compute: F) -> ReputationScore
    where
        F: FnOnce() -> ReputationScore,
    {
        self.cache.get_with(self.key(subject, now), compute)
    }

    /// Drop any cached score for `subject`, in every bucket.
    pub fn invalidate(&self, subject: &str) {
        let subject = address::normalize(subject);
        // Closures are enabled in `new`, so this cannot fail.
        let _ = self
            .cache
            .invalidate_entries_if(move |key, _| key.0 == subject);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
